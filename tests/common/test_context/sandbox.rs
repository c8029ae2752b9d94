use braintree_rust::{client::Environment, configuration::Credentials, BraintreeClient};

pub struct TestContext {
    pub client: BraintreeClient,
    pub merchant_id: String,
}

impl TestContext {
    pub async fn start() -> Self {
        // Take the required credentials from the env
        let merchant_id = std::env::var("ACCEPTANCE_TESTS_MERCHANT_ID").unwrap();
        let public_key = std::env::var("ACCEPTANCE_TESTS_PUBLIC_KEY").unwrap();
        let private_key = std::env::var("ACCEPTANCE_TESTS_PRIVATE_KEY").unwrap();

        // Configure a new BraintreeClient to point to Sandbox
        let client = BraintreeClient::builder(Credentials::Keys {
            merchant_id: merchant_id.clone(),
            public_key,
            private_key: private_key.into(),
        })
        .with_environment(Environment::Sandbox)
        .build()
        .unwrap();

        Self {
            client,
            merchant_id,
        }
    }

    pub fn environment(&self) -> Environment {
        Environment::Sandbox
    }
}
