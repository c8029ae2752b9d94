use crate::{
    common::test_context::TestContext,
    integration_tests::helpers::{self, MASTERCARD_NUMBER},
};
use braintree_rust::{
    apis::credit_cards::{CreditCardOptions, CreditCardRequest},
    error_codes, Error,
};

#[tokio::test]
async fn make_default_moves_the_default_flag() {
    let ctx = TestContext::start().await;
    let customer = helpers::create_customer_with_card(&ctx).await.unwrap();
    let first_token = customer.credit_cards[0].token.clone();

    let second = ctx
        .client
        .credit_cards
        .create_strict(&CreditCardRequest {
            customer_id: Some(customer.id.clone()),
            options: Some(CreditCardOptions {
                make_default: Some(true),
                ..Default::default()
            }),
            ..helpers::card_request(MASTERCARD_NUMBER)
        })
        .await
        .unwrap();
    assert!(second.default);
    assert_eq!(second.card_type.as_deref(), Some("MasterCard"));

    // Exactly one card per customer is the default
    let customer = ctx.client.customers.find(&customer.id).await.unwrap();
    assert_eq!(customer.credit_cards.len(), 2);
    assert_eq!(
        customer.credit_cards.iter().filter(|c| c.default).count(),
        1
    );
    assert_eq!(
        customer.default_payment_method().unwrap().token(),
        second.token
    );

    let first = ctx.client.credit_cards.find(&first_token).await.unwrap();
    assert!(!first.default);
}

#[tokio::test]
async fn card_for_unknown_customer_is_rejected() {
    let ctx = TestContext::start().await;

    let res = ctx
        .client
        .credit_cards
        .create(&CreditCardRequest {
            customer_id: Some("unknown-customer".to_string()),
            ..helpers::card_request(MASTERCARD_NUMBER)
        })
        .await
        .unwrap();

    let errors = res
        .failure()
        .expect("Expected failure")
        .errors
        .for_object("credit_card")
        .on("customer_id");
    assert_eq!(errors[0].code, error_codes::credit_card::CUSTOMER_ID_IS_INVALID);
}

#[tokio::test]
async fn conflicting_expiration_is_rejected_locally() {
    let ctx = TestContext::start().await;

    let err = ctx
        .client
        .credit_cards
        .create(&CreditCardRequest {
            customer_id: Some("some-customer".to_string()),
            expiration_month: Some("05".to_string()),
            ..helpers::card_request(MASTERCARD_NUMBER)
        })
        .await
        .expect_err("Expected error");
    assert!(matches!(err, Error::InvalidArgument(_)));
}

#[tokio::test]
async fn update_credit_card() {
    let ctx = TestContext::start().await;
    let customer = helpers::create_customer_with_card(&ctx).await.unwrap();
    let token = &customer.credit_cards[0].token;

    let updated = ctx
        .client
        .credit_cards
        .update_strict(
            token,
            &CreditCardRequest {
                cardholder_name: Some("Jen Jones".to_string()),
                expiration_date: Some("06/2031".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(&updated.token, token);
    assert_eq!(updated.cardholder_name.as_deref(), Some("Jen Jones"));
    assert_eq!(updated.expiration_date().as_deref(), Some("06/2031"));
    assert!(updated.default);
}

#[tokio::test]
async fn delete_credit_card() {
    let ctx = TestContext::start().await;
    let customer = helpers::create_customer_with_card(&ctx).await.unwrap();
    let token = &customer.credit_cards[0].token;

    ctx.client.credit_cards.delete_strict(token).await.unwrap();

    let err = ctx
        .client
        .credit_cards
        .find(token)
        .await
        .expect_err("Expected error");
    assert!(matches!(err, Error::NotFound));
}
