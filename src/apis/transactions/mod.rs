mod api;
mod model;
mod search;

pub use api::TransactionsApi;
pub use model::*;
pub use search::*;
