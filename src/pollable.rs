//! Polling of resources whose state moves on the gateway side.
//!
//! A submitted transaction walks through `submitted_for_settlement`, `settling` and
//! `settled` without any further call from the merchant, and funds held in escrow are
//! released by the master merchant. [`Pollable`] re-fetches a snapshot until it reaches
//! the wanted state.

use crate::{
    apis::transactions::{EscrowStatus, Status, Transaction},
    BraintreeClient, Error,
};
use async_trait::async_trait;
use chrono::Utc;
use retry_policies::{policies::ExponentialBackoff, RetryDecision, RetryPolicy};
use std::{future::Future, time::Duration};

/// Options to configure the behaviour of [`Pollable::poll_until`].
///
/// Defaults to an exponential backoff from 1 to 30 seconds between attempts, giving up
/// after 5 minutes. Attempts are never closer than one second apart.
#[derive(Debug)]
pub struct PollOptions<R: RetryPolicy> {
    retry_policy: R,
    min_wait: Duration,
}

impl Default for PollOptions<ExponentialBackoff> {
    fn default() -> Self {
        Self {
            retry_policy: ExponentialBackoff::builder()
                .retry_bounds(Duration::from_secs(1), Duration::from_secs(30))
                .build_with_total_retry_duration(Duration::from_secs(5 * 60)),
            min_wait: Duration::from_secs(1),
        }
    }
}

impl<R: RetryPolicy> PollOptions<R> {
    /// Replaces the policy deciding when to try again and when to give up.
    pub fn with_retry_policy<T: RetryPolicy>(self, retry_policy: T) -> PollOptions<T> {
        PollOptions {
            retry_policy,
            min_wait: self.min_wait,
        }
    }

    /// Sets the shortest wait between two fetches.
    pub fn with_min_wait(mut self, min_wait: Duration) -> Self {
        self.min_wait = min_wait;
        self
    }

    fn wait_before(&self, attempt: u32) -> Option<Duration> {
        match self.retry_policy.should_retry(attempt) {
            RetryDecision::Retry { execute_after } => Some(
                (execute_after - Utc::now())
                    .to_std()
                    .unwrap_or_default()
                    .max(self.min_wait),
            ),
            RetryDecision::DoNotRetry => None,
        }
    }
}

/// Error returned when polling stops before the wanted state is reached.
#[derive(thiserror::Error, Debug)]
pub enum PollError {
    /// The retry policy gave up.
    #[error("Resource did not reach the expected state after {attempts} attempts")]
    Timeout { attempts: u32 },
    /// Fetching the resource failed.
    #[error(transparent)]
    Error(#[from] Error),
}

/// Fetches snapshots with `fetch` until one satisfies `predicate`.
async fn poll<T, R, Fut>(
    mut fetch: impl FnMut() -> Fut + Send,
    options: &PollOptions<R>,
    predicate: impl Fn(&T) -> bool + Send,
) -> Result<T, PollError>
where
    T: Send,
    R: RetryPolicy + Sync,
    Fut: Future<Output = Result<T, Error>> + Send,
{
    let mut attempt = 0;
    loop {
        let snapshot = fetch().await?;
        if predicate(&snapshot) {
            return Ok(snapshot);
        }

        let wait = options.wait_before(attempt).ok_or(PollError::Timeout {
            attempts: attempt + 1,
        })?;
        tracing::debug!(attempt, "State not reached, polling again in {:?}", wait);
        tokio::time::sleep(wait).await;

        attempt += 1;
    }
}

/// A resource that can be re-fetched from the gateway.
#[async_trait]
pub trait Pollable: private::Sealed {
    type Output: Send;

    /// Fetches the current snapshot of this resource.
    async fn poll_once(&self, client: &BraintreeClient) -> Result<Self::Output, Error>;

    /// Fetches snapshots until `predicate` holds for one of them.
    #[tracing::instrument(name = "Poll for updates", skip_all)]
    async fn poll_until<R, F>(
        &self,
        client: &BraintreeClient,
        poll_options: PollOptions<R>,
        predicate: F,
    ) -> Result<Self::Output, PollError>
    where
        R: RetryPolicy + Send + Sync,
        F: for<'a> Fn(&'a Self::Output) -> bool + Send,
    {
        poll(|| self.poll_once(client), &poll_options, predicate).await
    }
}

/// A resource with a lifecycle that ends in states it cannot leave on its own.
pub trait IsInTerminalState {
    fn is_in_terminal_state(&self) -> bool;
}

/// Polling until the settlement lifecycle is over.
#[async_trait]
pub trait PollableUntilTerminalState: Pollable {
    async fn poll_until_terminal_state<R: RetryPolicy + Send + Sync>(
        &self,
        client: &BraintreeClient,
        poll_options: PollOptions<R>,
    ) -> Result<Self::Output, PollError>;
}

#[async_trait]
impl<T> PollableUntilTerminalState for T
where
    T: Pollable + Send + Sync,
    T::Output: IsInTerminalState,
{
    async fn poll_until_terminal_state<R: RetryPolicy + Send + Sync>(
        &self,
        client: &BraintreeClient,
        poll_options: PollOptions<R>,
    ) -> Result<Self::Output, PollError> {
        self.poll_until(client, poll_options, T::Output::is_in_terminal_state)
            .await
    }
}

/// Polling of a transaction held in escrow until its funds are released or refunded.
#[async_trait]
pub trait PollableUntilEscrowResolved: Pollable<Output = Transaction> {
    /// Polls until the escrow status is [`Released`](EscrowStatus::Released) or
    /// [`Refunded`](EscrowStatus::Refunded).
    ///
    /// Returns as soon as the transaction is not in escrow at all, or failed before
    /// settling, since no release can follow.
    async fn poll_until_escrow_resolved<R: RetryPolicy + Send + Sync>(
        &self,
        client: &BraintreeClient,
        poll_options: PollOptions<R>,
    ) -> Result<Transaction, PollError>;
}

#[async_trait]
impl PollableUntilEscrowResolved for Transaction {
    async fn poll_until_escrow_resolved<R: RetryPolicy + Send + Sync>(
        &self,
        client: &BraintreeClient,
        poll_options: PollOptions<R>,
    ) -> Result<Transaction, PollError> {
        self.poll_until(client, poll_options, |transaction: &Transaction| {
            match transaction.escrow_status {
                None => true,
                Some(EscrowStatus::Released | EscrowStatus::Refunded) => true,
                Some(_) => {
                    transaction.status.is_terminal() && transaction.status != Status::Settled
                }
            }
        })
        .await
    }
}

mod private {
    pub trait Sealed {}

    impl Sealed for crate::apis::transactions::Transaction {}
}
