// Default URLs
pub static DEVELOPMENT_URL: &str = "http://localhost:3000";
pub static SANDBOX_URL: &str = "https://api.sandbox.braintreegateway.com";
pub static PRODUCTION_URL: &str = "https://api.braintreegateway.com";

// Header names
pub static X_API_VERSION_HEADER: &str = "X-ApiVersion";

pub static API_VERSION: &str = "6";
pub static XML_CONTENT_TYPE: &str = "application/xml";
pub static USER_AGENT: &str = concat!("Braintree Rust ", env!("CARGO_PKG_VERSION"));
