use crate::common::test_context::TestContext;
use braintree_rust::apis::{
    credit_cards::CreditCardRequest,
    customers::{Customer, CustomerRequest},
};

pub static VISA_NUMBER: &str = "4111111111111111";
pub static MASTERCARD_NUMBER: &str = "5105105105105100";

pub fn card_request(number: &str) -> CreditCardRequest {
    CreditCardRequest {
        number: Some(number.to_string()),
        expiration_date: Some("05/2030".to_string()),
        cardholder_name: Some("Jen Smith".to_string()),
        ..Default::default()
    }
}

/// Vaults a new customer holding a single Visa card.
pub async fn create_customer_with_card(ctx: &TestContext) -> Result<Customer, anyhow::Error> {
    let customer = ctx
        .client
        .customers
        .create_strict(&CustomerRequest {
            first_name: Some("Jen".to_string()),
            last_name: Some("Smith".to_string()),
            email: Some("jen@example.com".to_string()),
            credit_card: Some(card_request(VISA_NUMBER)),
            ..Default::default()
        })
        .await?;

    Ok(customer)
}
