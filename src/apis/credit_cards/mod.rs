mod api;
mod model;

pub use api::CreditCardsApi;
pub use model::*;
