use crate::{common::test_context::TestContext, integration_tests::helpers};
use braintree_rust::{
    apis::transactions::{Status, TransactionOptions, TransactionRequest, TransactionType},
    error_codes, Error, GatewayResult,
};
use rust_decimal_macros::dec;

fn sale_request(token: &str) -> TransactionRequest {
    TransactionRequest {
        amount: Some(dec!(10.00)),
        payment_method_token: Some(token.to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn sale_with_vaulted_card() {
    let ctx = TestContext::start().await;
    let customer = helpers::create_customer_with_card(&ctx).await.unwrap();

    let transaction = ctx
        .client
        .transactions
        .sale_strict(&sale_request(&customer.credit_cards[0].token))
        .await
        .unwrap();

    assert_eq!(transaction.kind, TransactionType::Sale);
    assert_eq!(transaction.status, Status::Authorized);
    assert_eq!(transaction.amount, Some(dec!(10.00)));
    assert_eq!(
        transaction
            .credit_card_details
            .as_ref()
            .and_then(|card| card.last_4.as_deref()),
        Some("1111")
    );
    assert_eq!(
        transaction
            .customer_details
            .as_ref()
            .and_then(|details| details.id.as_deref()),
        Some(customer.id.as_str())
    );

    let found = ctx.client.transactions.find(&transaction.id).await.unwrap();
    assert_eq!(found.id, transaction.id);
}

#[tokio::test]
async fn void_twice() {
    let ctx = TestContext::start().await;
    let customer = helpers::create_customer_with_card(&ctx).await.unwrap();
    let transaction = ctx
        .client
        .transactions
        .sale_strict(&sale_request(&customer.credit_cards[0].token))
        .await
        .unwrap();

    let voided = ctx
        .client
        .transactions
        .void_strict(&transaction.id)
        .await
        .unwrap();
    assert_eq!(voided.status, Status::Voided);

    let res = ctx.client.transactions.void(&transaction.id).await.unwrap();
    let errors = res
        .failure()
        .expect("Expected failure")
        .errors
        .for_object("transaction")
        .on_base();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, error_codes::transaction::CANNOT_BE_VOIDED);
}

#[tokio::test]
async fn processor_decline_carries_the_transaction() {
    let ctx = TestContext::start().await;
    let customer = helpers::create_customer_with_card(&ctx).await.unwrap();

    let res = ctx
        .client
        .transactions
        .sale(&TransactionRequest {
            amount: Some(dec!(2000.00)),
            ..sale_request(&customer.credit_cards[0].token)
        })
        .await
        .unwrap();

    let failure = match res {
        GatewayResult::Failure(failure) => failure,
        GatewayResult::Success(transaction) => {
            panic!("Unexpected transaction: {:?}", transaction)
        }
    };
    assert!(failure.errors.is_empty());

    let transaction = failure.transaction.expect("Expected declined transaction");
    assert_eq!(transaction.status, Status::ProcessorDeclined);
    assert_eq!(transaction.processor_response_code.as_deref(), Some("2000"));
}

#[tokio::test]
async fn strict_decline_is_an_error() {
    let ctx = TestContext::start().await;
    let customer = helpers::create_customer_with_card(&ctx).await.unwrap();

    let err = ctx
        .client
        .transactions
        .sale_strict(&TransactionRequest {
            amount: Some(dec!(2000.00)),
            ..sale_request(&customer.credit_cards[0].token)
        })
        .await
        .expect_err("Expected error");

    assert!(matches!(
        err,
        Error::ValidationsFailed(failure) if failure.transaction.is_some()
    ));
}

#[tokio::test]
async fn refund_requires_settlement() {
    let ctx = TestContext::start().await;
    let customer = helpers::create_customer_with_card(&ctx).await.unwrap();
    let transaction = ctx
        .client
        .transactions
        .sale_strict(&sale_request(&customer.credit_cards[0].token))
        .await
        .unwrap();

    let res = ctx
        .client
        .transactions
        .refund(&transaction.id, None)
        .await
        .unwrap();

    let errors = res
        .failure()
        .expect("Expected failure")
        .errors
        .for_object("transaction")
        .on_base();
    assert_eq!(
        errors[0].code,
        error_codes::transaction::CANNOT_REFUND_UNLESS_SETTLED
    );
}

// Sandbox transactions only settle in the nightly batch
#[cfg(not(feature = "acceptance-tests"))]
#[tokio::test]
async fn settle_and_refund() {
    use braintree_rust::{pollable::PollOptions, PollableUntilTerminalState};
    use reqwest_retry::policies::ExponentialBackoff;
    use std::time::Duration;

    let ctx = TestContext::start().await;
    let customer = helpers::create_customer_with_card(&ctx).await.unwrap();

    let transaction = ctx
        .client
        .transactions
        .sale_strict(&TransactionRequest {
            options: Some(TransactionOptions {
                submit_for_settlement: Some(true),
                ..Default::default()
            }),
            ..sale_request(&customer.credit_cards[0].token)
        })
        .await
        .unwrap();
    assert_eq!(transaction.status, Status::SubmittedForSettlement);

    // Wait for the transaction to settle
    let settled = transaction
        .poll_until_terminal_state(
            &ctx.client,
            PollOptions::default().with_retry_policy(
                ExponentialBackoff::builder()
                    .retry_bounds(Duration::from_secs(1), Duration::from_secs(1))
                    .build_with_max_retries(5),
            ),
        )
        .await
        .unwrap();
    assert_eq!(settled.status, Status::Settled);

    // Partial refund
    let refund = ctx
        .client
        .transactions
        .refund_strict(&settled.id, Some(dec!(4.00)))
        .await
        .unwrap();
    assert_eq!(refund.kind, TransactionType::Credit);
    assert_eq!(refund.amount, Some(dec!(4.00)));
    assert_eq!(
        refund.refunded_transaction_id.as_deref(),
        Some(settled.id.as_str())
    );

    let original = ctx.client.transactions.find(&settled.id).await.unwrap();
    assert_eq!(original.refund_ids, vec![refund.id]);
}
