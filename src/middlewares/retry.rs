use async_trait::async_trait;
use reqwest::{Method, Request, Response};
use reqwest_middleware::{Middleware, Next};
use reqwest_retry::RetryTransientMiddleware;
use retry_policies::{RetryDecision, RetryPolicy};
use std::{fmt, sync::Arc};
use task_local_extensions::Extensions;

/// Actions that move a resource to its next state. Repeating one after a lost response
/// either fails or applies the transition twice.
const STATE_TRANSITIONS: &[&str] = &[
    "void",
    "submit_for_settlement",
    "hold_in_escrow",
    "release_from_escrow",
    "cancel_release",
    "cancel",
    "accept",
    "finalize",
];

/// Searches are sent as `POST` but do not change anything.
const SEARCHES: &[&str] = &[
    "advanced_search_ids",
    "advanced_search",
    "expired_ids",
    "expiring_ids",
    "expired",
    "expiring",
];

/// Middleware retrying transient failures of the requests the gateway can safely
/// receive twice.
///
/// - Reads (`GET`, `HEAD`) and deletions are retried.
/// - `PUT` updates are retried, `PUT` state transitions (void, settlement, escrow,
///   cancellation, dispute acceptance) are not.
/// - `POST` requests create resources or move money and are never retried, with the
///   exception of searches.
pub struct RetryGatewayMiddleware {
    inner: RetryTransientMiddleware<DynRetryPolicy>,
}

impl RetryGatewayMiddleware {
    pub fn new(retry_policy: DynRetryPolicy) -> Self {
        Self {
            inner: RetryTransientMiddleware::new_with_policy(retry_policy),
        }
    }
}

/// Whether the gateway can receive `method` on `path` twice without side effects.
fn is_safe_to_retry(method: &Method, path: &str) -> bool {
    let action = path.trim_end_matches('/').rsplit('/').next().unwrap_or_default();

    match *method {
        Method::GET | Method::HEAD | Method::DELETE => true,
        Method::PUT => !STATE_TRANSITIONS.contains(&action),
        Method::POST => SEARCHES.contains(&action),
        _ => false,
    }
}

#[async_trait]
impl Middleware for RetryGatewayMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        if is_safe_to_retry(req.method(), req.url().path()) {
            self.inner.handle(req, extensions, next).await
        } else {
            next.run(req, extensions).await
        }
    }
}

/// Shareable retry policy, since `dyn RetryPolicy` does not implement `RetryPolicy`.
#[derive(Clone)]
pub struct DynRetryPolicy(pub Arc<dyn RetryPolicy + Send + Sync + 'static>);

impl RetryPolicy for DynRetryPolicy {
    fn should_retry(&self, n_past_retries: u32) -> RetryDecision {
        self.0.should_retry(n_past_retries)
    }
}

impl fmt::Debug for DynRetryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DynRetryPolicy")
    }
}
