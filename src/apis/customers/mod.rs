mod api;
mod model;

pub use api::CustomersApi;
pub use model::*;
