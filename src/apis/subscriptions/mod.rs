mod api;
mod model;

pub use api::SubscriptionsApi;
pub use model::*;
