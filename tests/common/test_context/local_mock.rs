use crate::common::mock_server::BraintreeMockServer;
use braintree_rust::{client::Environment, configuration::Credentials, BraintreeClient};
use uuid::Uuid;

pub struct TestContext {
    pub client: BraintreeClient,
    pub merchant_id: String,
    mock_server: BraintreeMockServer,
}

impl TestContext {
    pub async fn start() -> Self {
        // Generate a new set of random credentials for this specific test
        let merchant_id = Uuid::new_v4().simple().to_string();
        let public_key = Uuid::new_v4().simple().to_string();
        let private_key = Uuid::new_v4().simple().to_string();

        let mock_server = BraintreeMockServer::start(&merchant_id, &public_key, &private_key).await;

        // Configure a new BraintreeClient to point to the mock server
        let client = BraintreeClient::builder(Credentials::Keys {
            merchant_id: merchant_id.clone(),
            public_key,
            private_key: private_key.into(),
        })
        .with_retry_policy(None) // Disable retries against the mock server
        .with_environment(Environment::from_single_url(mock_server.url()))
        .build()
        .unwrap();

        Self {
            client,
            merchant_id,
            mock_server,
        }
    }

    pub fn environment(&self) -> Environment {
        Environment::from_single_url(self.mock_server.url())
    }
}
