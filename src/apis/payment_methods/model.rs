use crate::{
    apis::{address::AddressRequest, credit_cards::CreditCard, Document},
    Error,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A vaulted payment method of any kind.
///
/// The kind is given by the root element of the gateway response.
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentMethod {
    CreditCard(Box<CreditCard>),
    PayPalAccount(PayPalAccount),
    /// A payment method kind this client has no model for.
    Unknown(UnknownPaymentMethod),
}

impl PaymentMethod {
    pub(crate) fn from_document(document: Document) -> Result<Self, Error> {
        let payment_method = match document.root.as_str() {
            "credit_card" => {
                PaymentMethod::CreditCard(Box::new(serde_json::from_value(document.value)?))
            }
            "paypal_account" => PaymentMethod::PayPalAccount(serde_json::from_value(document.value)?),
            kind => {
                let mut unknown: UnknownPaymentMethod = serde_json::from_value(document.value)?;
                unknown.kind = kind.to_string();
                PaymentMethod::Unknown(unknown)
            }
        };
        Ok(payment_method)
    }

    pub fn token(&self) -> &str {
        match self {
            PaymentMethod::CreditCard(card) => &card.token,
            PaymentMethod::PayPalAccount(account) => &account.token,
            PaymentMethod::Unknown(unknown) => &unknown.token,
        }
    }

    /// Whether this is the default payment method of its customer.
    pub fn is_default(&self) -> bool {
        match self {
            PaymentMethod::CreditCard(card) => card.default,
            PaymentMethod::PayPalAccount(account) => account.default,
            PaymentMethod::Unknown(unknown) => unknown.default,
        }
    }

    pub fn customer_id(&self) -> Option<&str> {
        match self {
            PaymentMethod::CreditCard(card) => card.customer_id.as_deref(),
            PaymentMethod::PayPalAccount(account) => account.customer_id.as_deref(),
            PaymentMethod::Unknown(unknown) => unknown.customer_id.as_deref(),
        }
    }

    pub fn image_url(&self) -> Option<&str> {
        match self {
            PaymentMethod::CreditCard(card) => card.image_url.as_deref(),
            PaymentMethod::PayPalAccount(account) => account.image_url.as_deref(),
            PaymentMethod::Unknown(unknown) => unknown.image_url.as_deref(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct PayPalAccount {
    pub token: String,
    pub email: Option<String>,
    pub customer_id: Option<String>,
    pub billing_agreement_id: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub default: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct UnknownPaymentMethod {
    /// Name of the root element, e.g. `venmo_account`.
    #[serde(skip)]
    pub kind: String,
    pub token: String,
    pub customer_id: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub default: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct PaymentMethodRequest {
    /// Required on creation.
    pub customer_id: Option<String>,
    /// Required on creation.
    pub payment_method_nonce: Option<String>,
    pub token: Option<String>,
    pub cardholder_name: Option<String>,
    pub billing_address_id: Option<String>,
    pub billing_address: Option<AddressRequest>,
    pub device_data: Option<String>,
    pub options: Option<PaymentMethodOptions>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct PaymentMethodOptions {
    pub make_default: Option<bool>,
    pub verify_card: Option<bool>,
    pub verification_merchant_account_id: Option<String>,
    pub fail_on_duplicate_payment_method: Option<bool>,
}
