use crate::error::Error;
use async_trait::async_trait;
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next};
use task_local_extensions::Extensions;

/// Reqwest middleware which translates HTTP failure statuses returned by the gateway
/// into the matching [`Error`](crate::error::Error) kinds.
///
/// `422 Unprocessable Entity` responses are let through: their body is a validation
/// error document which is decoded into a failed [`GatewayResult`](crate::result::GatewayResult).
pub struct ErrorHandlingMiddleware;

#[async_trait]
impl Middleware for ErrorHandlingMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        // Capture the response
        let response = next.run(req, extensions).await?;

        if let Some(error) = Error::from_status(response.status().as_u16()) {
            tracing::debug!("Failed HTTP request. Status code: {}", response.status());
            return Err(error.into());
        }

        Ok(response)
    }
}
