use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use reqwest::{header::HeaderValue, Request, Response};
use reqwest_middleware::{Middleware, Next};
use task_local_extensions::Extensions;

/// Reqwest middleware to inject the `Authorization` header into outgoing HTTP requests.
pub struct AuthenticationMiddleware {
    authorization: HeaderValue,
}

impl AuthenticationMiddleware {
    /// Basic authentication, used with merchant API keys and OAuth client credentials.
    pub fn basic(username: &str, password: &str) -> Result<Self, crate::Error> {
        let encoded = STANDARD.encode(format!("{}:{}", username, password));
        Self::from_value(&format!("Basic {}", encoded))
    }

    /// Bearer authentication, used with OAuth access tokens.
    pub fn bearer(token: &str) -> Result<Self, crate::Error> {
        Self::from_value(&format!("Bearer {}", token))
    }

    fn from_value(value: &str) -> Result<Self, crate::Error> {
        let mut authorization = HeaderValue::from_str(value).map_err(|_| {
            crate::Error::Configuration("Credentials contain invalid characters".to_string())
        })?;
        authorization.set_sensitive(true);

        Ok(Self { authorization })
    }
}

#[async_trait]
impl Middleware for AuthenticationMiddleware {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        req.headers_mut()
            .insert("Authorization", self.authorization.clone());

        //Run the rest of the middlewares
        next.run(req, extensions).await
    }
}
