use crate::common::mock_server::MockServerConfiguration;
use actix_web::{
    body::BoxBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpResponse,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use futures::{
    future::{LocalBoxFuture, Ready},
    FutureExt,
};
use std::{
    future::Future,
    sync::Arc,
    task::{Context, Poll},
};

/// Checks that all the requests carry the client user agent.
pub(super) async fn validate_user_agent(req: &mut ServiceRequest) -> Result<(), anyhow::Error> {
    anyhow::ensure!(
        req.headers()
            .get("User-Agent")
            .map(|v| v.to_str())
            .transpose()?
            == Some(concat!("Braintree Rust ", env!("CARGO_PKG_VERSION"))),
        "Invalid User-Agent"
    );

    Ok(())
}

/// Checks that all the requests pin the supported API version.
pub(super) async fn validate_api_version(req: &mut ServiceRequest) -> Result<(), anyhow::Error> {
    anyhow::ensure!(
        req.headers()
            .get("X-ApiVersion")
            .map(|v| v.to_str())
            .transpose()?
            == Some("6"),
        "Invalid or missing X-ApiVersion"
    );

    Ok(())
}

/// Rejects requests not authenticated with the merchant API keys.
pub(super) fn validate_authorization(
    configuration: MockServerConfiguration,
) -> impl Fn(&mut ServiceRequest) -> LocalBoxFuture<'_, Result<(), anyhow::Error>> {
    let expected = format!(
        "Basic {}",
        STANDARD.encode(format!(
            "{}:{}",
            configuration.public_key, configuration.private_key
        ))
    );

    move |req: &mut ServiceRequest| {
        let authorized = req
            .headers()
            .get("Authorization")
            .map_or(false, |v| v.as_bytes() == expected.as_bytes());

        Box::pin(async move {
            if authorized {
                Ok(())
            } else {
                Err(anyhow::Error::new(Unauthorized))
            }
        })
    }
}

/// Failure of [`validate_authorization`], answered with a `401`.
#[derive(thiserror::Error, Debug)]
#[error("Unauthorized")]
pub(super) struct Unauthorized;

/// Helper trait used to circumvent a limitation of Rust's Higher Ranked Trait Bounds
/// in the implementation of `MiddlewareFnWrapper::call`.
/// For more info see: https://users.rust-lang.org/t/higher-rank-trait-bounds-use-bound-lifetime-in-another-generic/45121
pub(super) trait CallableAsyncFn<'r> {
    type Output: Future<Output = Result<(), anyhow::Error>> + 'r;

    fn call(&self, req: &'r mut ServiceRequest) -> Self::Output;
}

impl<'r, F, R> CallableAsyncFn<'r> for F
where
    F: Fn(&'r mut ServiceRequest) -> R,
    R: Future<Output = Result<(), anyhow::Error>> + 'r,
{
    type Output = R;

    fn call(&self, req: &'r mut ServiceRequest) -> Self::Output {
        self(req)
    }
}

/// Wrapper around a function to act as an actix middleware.
pub(super) struct MiddlewareFn<F> {
    inner: Arc<F>,
}

impl<F> MiddlewareFn<F>
where
    F: for<'r> CallableAsyncFn<'r>,
{
    pub fn new(inner: F) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }
}

impl<S, F> Transform<S, ServiceRequest> for MiddlewareFn<F>
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
    S::Future: 'static,
    F: 'static + for<'r> CallableAsyncFn<'r>,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Transform = MiddlewareFnWrapper<S, F>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        futures::future::ok(MiddlewareFnWrapper {
            service: Arc::new(service),
            inner: self.inner.clone(),
        })
    }
}

pub(super) struct MiddlewareFnWrapper<S, F> {
    service: Arc<S>,
    inner: Arc<F>,
}

impl<S, F> Service<ServiceRequest> for MiddlewareFnWrapper<S, F>
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
    S::Future: 'static,
    F: 'static + for<'r> CallableAsyncFn<'r>,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = S::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ct: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ct)
    }

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        let inner = self.inner.clone();
        let service = self.service.clone();

        async move {
            match inner.call(&mut req).await {
                Err(e) if e.is::<Unauthorized>() => {
                    Ok(req.into_response(HttpResponse::Unauthorized().finish()))
                }
                Err(e) => Ok(
                    req.into_response(HttpResponse::InternalServerError().body(format!("{:?}", e)))
                ),
                Ok(_) => service.call(req).await,
            }
        }
        .boxed_local()
    }
}
