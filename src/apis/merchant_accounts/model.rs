use crate::xml::one_or_many;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Merchant account, either owned by the merchant or a sub-merchant of a marketplace.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct MerchantAccount {
    pub id: String,
    #[serde(default)]
    pub status: MerchantAccountStatus,
    pub currency_iso_code: Option<String>,
    #[serde(default)]
    pub default: bool,
    /// Master account of a sub-merchant.
    pub master_merchant_account: Option<Box<MerchantAccount>>,
    pub individual_details: Option<IndividualDetails>,
    pub business_details: Option<BusinessDetails>,
    pub funding_details: Option<FundingDetails>,
}

impl MerchantAccount {
    pub fn is_sub_merchant(&self) -> bool {
        self.master_merchant_account.is_some()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MerchantAccountStatus {
    Pending,
    Active,
    Suspended,
    #[default]
    #[serde(other)]
    Unrecognized,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct IndividualDetails {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub ssn_last_4: Option<String>,
    pub address: Option<MerchantAddress>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct BusinessDetails {
    pub legal_name: Option<String>,
    pub dba_name: Option<String>,
    pub tax_id: Option<String>,
    pub address: Option<MerchantAddress>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct FundingDetails {
    pub destination: Option<FundingDestination>,
    pub email: Option<String>,
    pub mobile_phone: Option<String>,
    pub routing_number: Option<String>,
    pub account_number_last_4: Option<String>,
    pub descriptor: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum FundingDestination {
    Bank,
    Email,
    MobilePhone,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct MerchantAddress {
    pub street_address: Option<String>,
    pub locality: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
}

/// Sub-merchant onboarding or update.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct MerchantAccountRequest {
    pub id: Option<String>,
    pub master_merchant_account_id: Option<String>,
    pub tos_accepted: Option<bool>,
    pub individual: Option<IndividualRequest>,
    pub business: Option<BusinessRequest>,
    pub funding: Option<FundingRequest>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct IndividualRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub ssn: Option<String>,
    pub address: Option<MerchantAddress>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct BusinessRequest {
    pub legal_name: Option<String>,
    pub dba_name: Option<String>,
    pub tax_id: Option<String>,
    pub address: Option<MerchantAddress>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct FundingRequest {
    pub destination: Option<FundingDestination>,
    pub email: Option<String>,
    pub mobile_phone: Option<String>,
    pub account_number: Option<String>,
    pub routing_number: Option<String>,
    pub descriptor: Option<String>,
}

#[derive(Serialize, Debug)]
pub(crate) struct CurrencyRequest<'a> {
    pub(crate) currency: &'a str,
    pub(crate) id: Option<&'a str>,
}

/// One page of the merchant accounts listing.
#[derive(Deserialize, Debug)]
pub(crate) struct MerchantAccountsPage {
    pub(crate) total_items: Option<i64>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub(crate) merchant_account: Vec<MerchantAccount>,
}
