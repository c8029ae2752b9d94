mod api;
mod model;

pub use api::DisputesApi;
pub use model::*;
