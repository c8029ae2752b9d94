//! APIs and models related to customer addresses.

mod api;
mod model;

pub use api::AddressApi;
pub use model::*;
