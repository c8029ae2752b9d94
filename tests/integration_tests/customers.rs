use crate::{
    common::test_context::TestContext,
    integration_tests::helpers::{self, VISA_NUMBER},
};
use braintree_rust::{
    apis::customers::CustomerRequest, error_codes, Error, GatewayResult,
};

#[tokio::test]
async fn create_and_find_customer() {
    let ctx = TestContext::start().await;

    let customer = helpers::create_customer_with_card(&ctx).await.unwrap();
    assert_eq!(customer.first_name.as_deref(), Some("Jen"));
    assert_eq!(customer.credit_cards.len(), 1);
    assert!(customer.credit_cards[0].default);

    let found = ctx.client.customers.find(&customer.id).await.unwrap();
    assert_eq!(found, customer);

    // The only card is the default payment method
    let default_payment_method = found.default_payment_method().unwrap();
    assert_eq!(default_payment_method.token(), customer.credit_cards[0].token);
    assert_eq!(
        customer.credit_cards[0].masked_number().as_deref(),
        Some("411111******1111")
    );
}

#[tokio::test]
async fn invalid_email_is_a_validation_failure() {
    let ctx = TestContext::start().await;

    let res = ctx
        .client
        .customers
        .create(&CustomerRequest {
            email: Some("invalid".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    let failure = match res {
        GatewayResult::Failure(failure) => failure,
        GatewayResult::Success(customer) => panic!("Unexpected customer: {:?}", customer),
    };
    let errors = failure.errors.for_object("customer").on("email");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, error_codes::customer::EMAIL_IS_INVALID);
}

#[tokio::test]
async fn card_errors_are_nested_under_customer() {
    let ctx = TestContext::start().await;

    let res = ctx
        .client
        .customers
        .create(&CustomerRequest {
            first_name: Some("Jen".to_string()),
            credit_card: Some(helpers::card_request("1")),
            ..Default::default()
        })
        .await
        .unwrap();

    let failure = res.failure().expect("Expected failure");
    let errors = failure
        .errors
        .for_object("customer")
        .for_object("credit_card")
        .on("number");
    assert_eq!(
        errors[0].code,
        error_codes::credit_card::NUMBER_HAS_INVALID_LENGTH
    );
    assert!(failure.errors.for_object("customer").on("number").is_empty());
}

#[tokio::test]
async fn strict_create_fails_with_validation_error() {
    let ctx = TestContext::start().await;

    let err = ctx
        .client
        .customers
        .create_strict(&CustomerRequest {
            email: Some("invalid".to_string()),
            ..Default::default()
        })
        .await
        .expect_err("Expected error");

    match err {
        Error::ValidationsFailed(failure) => assert_eq!(failure.errors.deep_size(), 1),
        other => panic!("Unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn update_customer() {
    let ctx = TestContext::start().await;
    let customer = helpers::create_customer_with_card(&ctx).await.unwrap();

    let updated = ctx
        .client
        .customers
        .update_strict(
            &customer.id,
            &CustomerRequest {
                last_name: Some("Jones".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, customer.id);
    assert_eq!(updated.first_name.as_deref(), Some("Jen"));
    assert_eq!(updated.last_name.as_deref(), Some("Jones"));
}

#[tokio::test]
async fn delete_customer() {
    let ctx = TestContext::start().await;
    let customer = helpers::create_customer_with_card(&ctx).await.unwrap();

    ctx.client.customers.delete_strict(&customer.id).await.unwrap();

    let err = ctx
        .client
        .customers
        .find(&customer.id)
        .await
        .expect_err("Expected error");
    assert!(matches!(err, Error::NotFound));

    // The cards of the customer are gone too
    let err = ctx
        .client
        .credit_cards
        .find(&customer.credit_cards[0].token)
        .await
        .expect_err("Expected error");
    assert!(matches!(err, Error::NotFound));
}

#[tokio::test]
async fn blank_id_is_not_found() {
    let ctx = TestContext::start().await;

    let err = ctx.client.customers.find(" ").await.expect_err("Expected error");
    assert!(matches!(err, Error::NotFound));
}

#[tokio::test]
async fn customer_card_details_are_kept() {
    let ctx = TestContext::start().await;

    let customer = ctx
        .client
        .customers
        .create_strict(&CustomerRequest {
            credit_card: Some(helpers::card_request(VISA_NUMBER)),
            ..Default::default()
        })
        .await
        .unwrap();

    let card = &customer.credit_cards[0];
    assert_eq!(card.customer_id.as_deref(), Some(customer.id.as_str()));
    assert_eq!(card.expiration_date().as_deref(), Some("05/2030"));
    assert_eq!(card.cardholder_name.as_deref(), Some("Jen Smith"));
}
