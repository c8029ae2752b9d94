mod api;
mod model;

pub use api::TransparentRedirectApi;
pub use model::*;
