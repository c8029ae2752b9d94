use crate::apis::{
    address::{Address, AddressRequest},
    credit_cards::CreditCardDetails,
    transactions::RiskData,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Verification of a credit card, run when vaulting with `verify_card` or on demand.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct CreditCardVerification {
    pub id: String,
    #[serde(default)]
    pub status: VerificationStatus,
    pub amount: Option<Decimal>,
    pub currency_iso_code: Option<String>,
    pub processor_response_code: Option<String>,
    pub processor_response_text: Option<String>,
    pub cvv_response_code: Option<String>,
    pub avs_error_response_code: Option<String>,
    pub avs_postal_code_response_code: Option<String>,
    pub avs_street_address_response_code: Option<String>,
    pub gateway_rejection_reason: Option<String>,
    pub merchant_account_id: Option<String>,
    pub credit_card: Option<CreditCardDetails>,
    pub billing: Option<Address>,
    pub risk_data: Option<RiskData>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Default)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    Verified,
    ProcessorDeclined,
    GatewayRejected,
    Failed,
    #[default]
    #[serde(other)]
    Unrecognized,
}

/// Request to verify a card without vaulting it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct VerificationRequest {
    pub credit_card: Option<VerificationCreditCard>,
    pub payment_method_nonce: Option<String>,
    pub options: Option<VerificationOptions>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct VerificationCreditCard {
    pub number: Option<String>,
    pub cardholder_name: Option<String>,
    pub cvv: Option<String>,
    pub expiration_date: Option<String>,
    pub expiration_month: Option<String>,
    pub expiration_year: Option<String>,
    pub billing_address: Option<AddressRequest>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct VerificationOptions {
    pub merchant_account_id: Option<String>,
    pub amount: Option<Decimal>,
}
