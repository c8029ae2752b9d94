//! Standard errors used by all functions in the crate.

use crate::result::ErrorResult;

/// Error collecting all possible failures of the Braintree client.
///
/// Validation failures reported by the gateway are *not* errors for the regular
/// gateway operations: those return a [`GatewayResult::Failure`](crate::result::GatewayResult).
/// Only the `*_strict` variants turn them into [`Error::ValidationsFailed`].
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Reqwest error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
    /// The gateway rejected the credentials (HTTP 401).
    #[error("Authentication failed")]
    Authentication,
    /// The credentials are valid but not allowed to perform this operation (HTTP 403).
    #[error("Not authorized to perform this operation")]
    Authorization,
    /// The requested resource does not exist (HTTP 404).
    #[error("Resource not found")]
    NotFound,
    /// This version of the client is no longer supported by the gateway (HTTP 426).
    #[error("Client library upgrade required")]
    UpgradeRequired,
    /// Too many requests (HTTP 429).
    #[error("Too many requests")]
    TooManyRequests,
    /// Internal gateway error (HTTP 500).
    #[error("Gateway server error")]
    Server,
    /// The gateway is down for maintenance (HTTP 503).
    #[error("Gateway unavailable")]
    ServiceUnavailable,
    /// Any other unexpected HTTP status.
    #[error("Unexpected HTTP status {0}")]
    UnexpectedStatus(u16),
    /// The client is missing the credentials required by the operation.
    #[error("Configuration error: {0}")]
    Configuration(String),
    /// The arguments of a call were rejected before reaching the gateway.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// The gateway returned validation errors to a `*_strict` call.
    #[error("Validations failed: {}", .0.message)]
    ValidationsFailed(Box<ErrorResult>),
    /// A signed payload did not verify.
    #[error("Invalid signature: {0}")]
    InvalidSignature(String),
    /// The response body could not be decoded.
    #[error("Error decoding gateway response: {0}")]
    Decode(String),
    /// Catch-all variant for unexpected errors.
    #[error(transparent)]
    Other(anyhow::Error),
}

impl Error {
    /// Maps a non-successful HTTP status into the matching error kind.
    ///
    /// Returns `None` for successful statuses and for `422 Unprocessable Entity`,
    /// which carries a validation error document instead.
    pub(crate) fn from_status(status: u16) -> Option<Self> {
        match status {
            200..=299 | 422 => None,
            401 => Some(Error::Authentication),
            403 => Some(Error::Authorization),
            404 => Some(Error::NotFound),
            426 => Some(Error::UpgradeRequired),
            429 => Some(Error::TooManyRequests),
            500 => Some(Error::Server),
            503 => Some(Error::ServiceUnavailable),
            other => Some(Error::UnexpectedStatus(other)),
        }
    }
}

impl From<reqwest_middleware::Error> for Error {
    fn from(e: reqwest_middleware::Error) -> Self {
        match e {
            reqwest_middleware::Error::Reqwest(e) => Error::HttpError(e),
            reqwest_middleware::Error::Middleware(e) => {
                e.downcast::<Error>().unwrap_or_else(Error::Other)
            }
        }
    }
}

impl From<Error> for reqwest_middleware::Error {
    fn from(e: Error) -> Self {
        reqwest_middleware::Error::Middleware(e.into())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(e: quick_xml::Error) -> Self {
        Error::Decode(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Decode(e.to_string())
    }
}
