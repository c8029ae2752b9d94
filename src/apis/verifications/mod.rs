mod api;
mod model;

pub use api::VerificationsApi;
pub use model::*;
