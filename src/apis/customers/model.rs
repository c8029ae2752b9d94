use crate::apis::{
    address::Address,
    credit_cards::{CreditCard, CreditCardRequest},
    payment_methods::{PayPalAccount, PaymentMethod},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Customer stored in the vault, together with its payment methods and addresses.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Customer {
    pub id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub fax: Option<String>,
    pub website: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub credit_cards: Vec<CreditCard>,
    #[serde(default)]
    pub paypal_accounts: Vec<PayPalAccount>,
    #[serde(default)]
    pub addresses: Vec<Address>,
    #[serde(default)]
    pub custom_fields: HashMap<String, String>,
}

impl Customer {
    /// All the payment methods of the customer, cards first.
    pub fn payment_methods(&self) -> Vec<PaymentMethod> {
        self.credit_cards
            .iter()
            .cloned()
            .map(|card| PaymentMethod::CreditCard(Box::new(card)))
            .chain(
                self.paypal_accounts
                    .iter()
                    .cloned()
                    .map(PaymentMethod::PayPalAccount),
            )
            .collect()
    }

    /// The payment method used when none is specified.
    pub fn default_payment_method(&self) -> Option<PaymentMethod> {
        self.payment_methods().into_iter().find(PaymentMethod::is_default)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct CustomerRequest {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub fax: Option<String>,
    pub website: Option<String>,
    pub device_data: Option<String>,
    /// Vaults the payment method the nonce refers to.
    pub payment_method_nonce: Option<String>,
    /// Vaults a card along with the customer.
    pub credit_card: Option<CreditCardRequest>,
    pub custom_fields: Option<HashMap<String, String>>,
}
