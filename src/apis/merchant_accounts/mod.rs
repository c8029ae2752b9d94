mod api;
mod model;

pub use api::MerchantAccountsApi;
pub use model::*;
