//! Module containing the main Braintree API client.

use crate::{
    apis::{
        address::AddressApi, credit_cards::CreditCardsApi, customers::CustomersApi,
        disputes::DisputesApi, merchant_accounts::MerchantAccountsApi, oauth::OAuthApi,
        payment_methods::PaymentMethodsApi, subscriptions::SubscriptionsApi,
        transactions::TransactionsApi, transparent_redirect::TransparentRedirectApi,
        verifications::VerificationsApi, BraintreeClientInner,
    },
    common::{DEVELOPMENT_URL, PRODUCTION_URL, SANDBOX_URL},
    configuration::{Configuration, Credentials, Token},
    middlewares::{
        authentication::AuthenticationMiddleware,
        error_handling::ErrorHandlingMiddleware,
        retry::{DynRetryPolicy, RetryGatewayMiddleware},
    },
    Error,
};
use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use reqwest_retry::{policies::ExponentialBackoff, RetryPolicy};
use reqwest_tracing::TracingMiddleware;
use std::sync::Arc;

/// Client for the Braintree gateway APIs.
///
/// Each resource has its own client, exposed as a public field. All of them share the
/// same configuration and HTTP connection pool, and are cheap to clone.
///
/// Reads, deletions, updates and searches are automatically retried on transient
/// failures. State transitions such as voids and settlements, and requests moving
/// money, are never retried.
#[derive(Debug, Clone)]
pub struct BraintreeClient {
    /// Customer addresses APIs client.
    pub address: AddressApi,
    /// Credit cards APIs client.
    pub credit_cards: CreditCardsApi,
    /// Customers APIs client.
    pub customers: CustomersApi,
    /// Disputes APIs client.
    pub disputes: DisputesApi,
    /// Merchant accounts APIs client.
    pub merchant_accounts: MerchantAccountsApi,
    /// OAuth APIs client.
    pub oauth: OAuthApi,
    /// Generic payment methods APIs client.
    pub payment_methods: PaymentMethodsApi,
    /// Subscriptions APIs client.
    pub subscriptions: SubscriptionsApi,
    /// Transactions APIs client.
    pub transactions: TransactionsApi,
    /// Transparent redirect helpers.
    pub transparent_redirect: TransparentRedirectApi,
    /// Credit card verifications APIs client.
    pub verifications: VerificationsApi,
    inner: Arc<BraintreeClientInner>,
}

impl BraintreeClient {
    /// Builds a new [`BraintreeClient`](crate::client::BraintreeClient) with the default configuration.
    pub fn new(credentials: Credentials) -> Result<BraintreeClient, Error> {
        BraintreeClientBuilder::new(credentials).build()
    }

    /// Returns a new builder to configure a new [`BraintreeClient`](crate::client::BraintreeClient).
    pub fn builder(credentials: Credentials) -> BraintreeClientBuilder {
        BraintreeClientBuilder::new(credentials)
    }

    /// The configuration this client was built with.
    pub fn configuration(&self) -> &Configuration {
        &self.inner.configuration
    }
}

/// Builder for a [`BraintreeClient`](crate::client::BraintreeClient).
#[derive(Debug)]
pub struct BraintreeClientBuilder {
    client: reqwest::Client,
    retry_policy: Option<DynRetryPolicy>,
    environment: Environment,
    credentials: Credentials,
    client_credentials: Option<(String, Token)>,
}

impl BraintreeClientBuilder {
    /// Creates a new builder to configure a [`BraintreeClient`](crate::client::BraintreeClient).
    pub fn new(credentials: Credentials) -> Self {
        Self {
            client: reqwest::Client::new(),
            retry_policy: Some(DynRetryPolicy(Arc::new(
                ExponentialBackoff::builder().build_with_max_retries(3),
            ))),
            environment: Environment::Production,
            credentials,
            client_credentials: None,
        }
    }

    /// Consumes the builder and builds a new [`BraintreeClient`](crate::client::BraintreeClient).
    ///
    /// Fails with [`Error::Configuration`](crate::Error::Configuration) if the credentials are malformed.
    pub fn build(self) -> Result<BraintreeClient, Error> {
        let mut configuration = Configuration::new(self.credentials, self.environment)?;
        if let Some((client_id, client_secret)) = self.client_credentials {
            configuration.set_client_credentials(client_id, client_secret)?;
        }

        // Merchant-scoped calls use either the access token or the API keys
        let merchant_auth = match (
            &configuration.access_token,
            &configuration.public_key,
            &configuration.private_key,
        ) {
            (Some(access_token), _, _) => Some(AuthenticationMiddleware::bearer(
                access_token.expose_secret(),
            )?),
            (None, Some(public_key), Some(private_key)) => Some(AuthenticationMiddleware::basic(
                public_key,
                private_key.expose_secret(),
            )?),
            _ => None,
        };

        // OAuth calls use the application credentials
        let oauth_auth = match (&configuration.client_id, &configuration.client_secret) {
            (Some(client_id), Some(client_secret)) => Some(AuthenticationMiddleware::basic(
                client_id,
                client_secret.expose_secret(),
            )?),
            _ => None,
        };

        let inner = Arc::new(BraintreeClientInner {
            client: merchant_auth.map(|auth| {
                build_client_with_middleware(self.client.clone(), self.retry_policy.clone(), auth)
            }),
            oauth_client: oauth_auth.map(|auth| {
                build_client_with_middleware(self.client.clone(), self.retry_policy.clone(), auth)
            }),
            configuration,
        });

        Ok(BraintreeClient {
            address: AddressApi::new(inner.clone()),
            credit_cards: CreditCardsApi::new(inner.clone()),
            customers: CustomersApi::new(inner.clone()),
            disputes: DisputesApi::new(inner.clone()),
            merchant_accounts: MerchantAccountsApi::new(inner.clone()),
            oauth: OAuthApi::new(inner.clone()),
            payment_methods: PaymentMethodsApi::new(inner.clone()),
            subscriptions: SubscriptionsApi::new(inner.clone()),
            transactions: TransactionsApi::new(inner.clone()),
            transparent_redirect: TransparentRedirectApi::new(inner.clone()),
            verifications: VerificationsApi::new(inner.clone()),
            inner,
        })
    }

    /// Sets a specific reqwest [`Client`](reqwest::Client) to use.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Sets a specific [`RetryPolicy`](retry_policies::RetryPolicy) to use when retrying transient failures.
    ///
    /// To disable automatic retrying of failed requests, use `None`.
    pub fn with_retry_policy(
        mut self,
        retry_policy: impl Into<Option<Arc<dyn RetryPolicy + Send + Sync + 'static>>>,
    ) -> Self {
        self.retry_policy = retry_policy.into().map(DynRetryPolicy);
        self
    }

    /// Sets the environment to which this client should connect.
    ///
    /// Defaults to: [`Environment::Production`]. Ignored when authenticating with an
    /// access token, which carries its own environment.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Attaches OAuth application credentials, required by the [`OAuthApi`](crate::apis::oauth::OAuthApi).
    pub fn with_client_credentials(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<Token>,
    ) -> Self {
        self.client_credentials = Some((client_id.into(), client_secret.into()));
        self
    }
}

fn build_client_with_middleware(
    client: reqwest::Client,
    retry_policy: Option<DynRetryPolicy>,
    auth_middleware: AuthenticationMiddleware,
) -> ClientWithMiddleware {
    let mut builder = reqwest_middleware::ClientBuilder::new(client)
        .with(TracingMiddleware::default())
        .with(ErrorHandlingMiddleware);

    if let Some(retry_policy) = retry_policy {
        builder = builder.with(RetryGatewayMiddleware::new(retry_policy));
    }

    builder.with(auth_middleware).build()
}

/// Gateway environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    /// A gateway running locally.
    Development,
    Sandbox,
    Production,
    /// Custom gateway URL, e.g. a local mock.
    Custom(Url),
}

impl Environment {
    /// Builds a custom environment pointing to the given URL.
    pub fn from_single_url(url: &Url) -> Self {
        Environment::Custom(url.clone())
    }

    /// Parses an environment name, as found in access tokens.
    pub fn parse(name: &str) -> Result<Self, Error> {
        match name {
            "development" | "integration" => Ok(Environment::Development),
            "sandbox" => Ok(Environment::Sandbox),
            "production" => Ok(Environment::Production),
            other => Err(Error::Configuration(format!(
                "\"{}\" is not a valid environment",
                other
            ))),
        }
    }

    /// Base URL of the gateway, without a trailing slash.
    pub fn base_url(&self) -> String {
        match self {
            Environment::Development => DEVELOPMENT_URL.to_string(),
            Environment::Sandbox => SANDBOX_URL.to_string(),
            Environment::Production => PRODUCTION_URL.to_string(),
            Environment::Custom(url) => url.as_str().trim_end_matches('/').to_string(),
        }
    }
}
