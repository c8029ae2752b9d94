use crate::common::test_context::TestContext;
use braintree_rust::{configuration::Credentials, BraintreeClient, Error};

#[tokio::test]
async fn invalid_credentials() {
    let ctx = TestContext::start().await;

    // Create a new client with a set of invalid keys pointing to the same gateway
    let client = BraintreeClient::builder(Credentials::Keys {
        merchant_id: ctx.merchant_id.clone(),
        public_key: "invalid".to_string(),
        private_key: "invalid".into(),
    })
    .with_retry_policy(None)
    .with_environment(ctx.environment())
    .build()
    .unwrap();

    let err = client
        .customers
        .find("some-customer")
        .await
        .expect_err("Expected error");
    assert!(matches!(err, Error::Authentication));
}

#[tokio::test]
async fn client_is_scoped_to_merchant() {
    let ctx = TestContext::start().await;

    let configuration = ctx.client.configuration();
    assert_eq!(configuration.merchant_id().unwrap(), ctx.merchant_id);
    assert!(configuration
        .merchant_url()
        .unwrap()
        .ends_with(&format!("/merchants/{}", ctx.merchant_id)));
}
