//! A Rust client for the [Braintree](https://www.braintreepayments.com) payment gateway.
//!
//! The client speaks the gateway XML API and exposes one sub-client per resource:
//! customers, credit cards, transactions, subscriptions and so on.
//!
//! # Usage
//!
//! ## Initialize a new `BraintreeClient`
//!
//! Create a new [`BraintreeClient`](crate::client::BraintreeClient) with your merchant id
//! and API keys, as found in the Braintree control panel.
//!
//! ```rust,no_run
//! # use braintree_rust::{BraintreeClient, client::Environment, configuration::Credentials};
//! # fn main() -> Result<(), braintree_rust::Error> {
//! let client = BraintreeClient::builder(Credentials::Keys {
//!     merchant_id: "your-merchant-id".into(),
//!     public_key: "your-public-key".into(),
//!     private_key: "your-private-key".into(),
//! })
//! .with_environment(Environment::Sandbox)
//! .build()?;
//! # Ok(())
//! # }
//! ```
//!
//! By default, a `BraintreeClient` connects to the Production environment.
//!
//! ## Charge a card
//!
//! Mutating operations return a [`GatewayResult`](crate::result::GatewayResult): validation
//! failures and processor declines are regular values, not errors.
//!
//! ```rust,no_run
//! # use braintree_rust::{BraintreeClient, Error, GatewayResult, apis::transactions::*};
//! # use rust_decimal::Decimal;
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let client: BraintreeClient = unreachable!();
//! #
//! let res = client
//!     .transactions
//!     .sale(&TransactionRequest {
//!         amount: Some(Decimal::new(1000, 2)),
//!         payment_method_nonce: Some("nonce-from-the-client".into()),
//!         options: Some(TransactionOptions {
//!             submit_for_settlement: Some(true),
//!             ..Default::default()
//!         }),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! match res {
//!     GatewayResult::Success(transaction) => println!("Charged: {}", transaction.id),
//!     GatewayResult::Failure(failure) => {
//!         for error in failure.errors.deep_errors() {
//!             println!("{}: {}", error.code, error.message);
//!         }
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Every mutating operation has a `*_strict` twin that returns the entity directly and
//! fails with [`Error::ValidationsFailed`](crate::Error::ValidationsFailed) instead.
//!
//! ## Vault a customer
//!
//! ```rust,no_run
//! # use braintree_rust::{BraintreeClient, Error, apis::{customers::*, credit_cards::*}};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let client: BraintreeClient = unreachable!();
//! #
//! let customer = client
//!     .customers
//!     .create_strict(&CustomerRequest {
//!         first_name: Some("Jen".into()),
//!         credit_card: Some(CreditCardRequest {
//!             number: Some("4111111111111111".into()),
//!             expiration_date: Some("05/2030".into()),
//!             ..Default::default()
//!         }),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! tracing::info!("Vaulted customer {}", customer.id);
//! # Ok(())
//! # }
//! ```

#![deny(missing_debug_implementations)]
#![forbid(unsafe_code)]

pub mod apis;
pub mod client;
mod common;
pub mod configuration;
pub mod digest;
pub mod error;
pub mod error_codes;
mod middlewares;
pub mod pollable;
mod query_string;
pub mod result;
pub mod xml;

pub use client::BraintreeClient;
pub use error::Error;
pub use pollable::{Pollable, PollableUntilEscrowResolved, PollableUntilTerminalState};
pub use result::GatewayResult;
