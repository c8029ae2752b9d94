use crate::apis::{
    address::{Address, AddressRequest},
    verifications::CreditCardVerification,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Credit card stored in the vault.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct CreditCard {
    pub token: String,
    pub bin: Option<String>,
    pub last_4: Option<String>,
    pub card_type: Option<String>,
    pub expiration_month: Option<String>,
    pub expiration_year: Option<String>,
    pub cardholder_name: Option<String>,
    pub customer_id: Option<String>,
    pub billing_address: Option<Address>,
    #[serde(default)]
    pub default: bool,
    #[serde(default)]
    pub expired: bool,
    #[serde(default)]
    pub venmo_sdk: bool,
    pub unique_number_identifier: Option<String>,
    pub image_url: Option<String>,
    /// Verifications run against the card, oldest first.
    #[serde(default)]
    pub verifications: Vec<CreditCardVerification>,
    #[serde(default)]
    pub prepaid: Indicator,
    #[serde(default)]
    pub debit: Indicator,
    #[serde(default)]
    pub commercial: Indicator,
    #[serde(default)]
    pub durbin_regulated: Indicator,
    #[serde(default)]
    pub healthcare: Indicator,
    #[serde(default)]
    pub payroll: Indicator,
    pub country_of_issuance: Option<String>,
    pub issuing_bank: Option<String>,
    pub product_id: Option<String>,
    #[serde(default)]
    pub is_network_tokenized: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl CreditCard {
    /// Expiration date formatted as `MM/YYYY`.
    pub fn expiration_date(&self) -> Option<String> {
        match (&self.expiration_month, &self.expiration_year) {
            (Some(month), Some(year)) => Some(format!("{}/{}", month, year)),
            _ => None,
        }
    }

    /// Card number with everything but the BIN and the last four digits masked.
    pub fn masked_number(&self) -> Option<String> {
        match (&self.bin, &self.last_4) {
            (Some(bin), Some(last_4)) => Some(format!("{}******{}", bin, last_4)),
            _ => None,
        }
    }

    /// The most recent verification of this card.
    pub fn verification(&self) -> Option<&CreditCardVerification> {
        self.verifications
            .iter()
            .max_by_key(|verification| verification.created_at)
    }
}

/// Tri-state flag reported by the card networks for some card attributes.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum Indicator {
    Yes,
    No,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Snapshot of the card used by a transaction or a verification.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct CreditCardDetails {
    pub token: Option<String>,
    pub bin: Option<String>,
    pub last_4: Option<String>,
    pub card_type: Option<String>,
    pub expiration_month: Option<String>,
    pub expiration_year: Option<String>,
    pub cardholder_name: Option<String>,
    pub customer_location: Option<String>,
    pub unique_number_identifier: Option<String>,
    #[serde(default)]
    pub prepaid: Indicator,
    #[serde(default)]
    pub debit: Indicator,
    #[serde(default)]
    pub commercial: Indicator,
    #[serde(default)]
    pub durbin_regulated: Indicator,
    #[serde(default)]
    pub healthcare: Indicator,
    #[serde(default)]
    pub payroll: Indicator,
    pub country_of_issuance: Option<String>,
    pub issuing_bank: Option<String>,
    pub product_id: Option<String>,
    pub image_url: Option<String>,
}

impl CreditCardDetails {
    /// Expiration date formatted as `MM/YYYY`.
    pub fn expiration_date(&self) -> Option<String> {
        match (&self.expiration_month, &self.expiration_year) {
            (Some(month), Some(year)) => Some(format!("{}/{}", month, year)),
            _ => None,
        }
    }

    pub fn masked_number(&self) -> Option<String> {
        match (&self.bin, &self.last_4) {
            (Some(bin), Some(last_4)) => Some(format!("{}******{}", bin, last_4)),
            _ => None,
        }
    }
}

/// Credit card fields accepted when vaulting or updating a card.
///
/// The expiration is given either as `expiration_date` (`MM/YYYY`) or as
/// `expiration_month` and `expiration_year`, never both.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct CreditCardRequest {
    pub customer_id: Option<String>,
    pub cardholder_name: Option<String>,
    pub number: Option<String>,
    pub cvv: Option<String>,
    pub expiration_date: Option<String>,
    pub expiration_month: Option<String>,
    pub expiration_year: Option<String>,
    pub token: Option<String>,
    pub payment_method_nonce: Option<String>,
    pub billing_address_id: Option<String>,
    pub billing_address: Option<AddressRequest>,
    pub device_data: Option<String>,
    pub options: Option<CreditCardOptions>,
}

impl CreditCardRequest {
    pub(crate) fn validate_expiration(&self) -> Result<(), crate::Error> {
        if self.expiration_date.is_some()
            && (self.expiration_month.is_some() || self.expiration_year.is_some())
        {
            return Err(crate::Error::InvalidArgument(
                "create with both expiration_month and expiration_year or only expiration_date"
                    .to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct CreditCardOptions {
    pub make_default: Option<bool>,
    pub verify_card: Option<bool>,
    pub verification_merchant_account_id: Option<String>,
    pub verification_amount: Option<Decimal>,
    pub fail_on_duplicate_payment_method: Option<bool>,
    /// Token of the card to update when vaulting through a customer update.
    pub update_existing_token: Option<String>,
}
