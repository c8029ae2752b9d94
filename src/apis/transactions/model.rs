use crate::{
    apis::{
        address::{Address, AddressRequest},
        credit_cards::CreditCardDetails,
        disputes::Dispute,
    },
    pollable::IsInTerminalState,
    BraintreeClient, Error, Pollable,
};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Transaction moving money from (sale) or to (credit) a payment method.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: TransactionType,
    pub amount: Option<Decimal>,
    pub currency_iso_code: Option<String>,
    #[serde(default)]
    pub status: Status,
    pub escrow_status: Option<EscrowStatus>,
    pub order_id: Option<String>,
    pub merchant_account_id: Option<String>,
    pub sub_merchant_account_id: Option<String>,
    pub master_merchant_account_id: Option<String>,
    pub subscription_id: Option<String>,
    pub payment_instrument_type: Option<String>,
    pub purchase_order_number: Option<String>,
    pub channel: Option<String>,
    pub recurring: Option<bool>,
    pub refunded_transaction_id: Option<String>,
    #[serde(default)]
    pub refund_ids: Vec<String>,
    #[serde(default)]
    pub partial_settlement_transaction_ids: Vec<String>,
    pub authorized_transaction_id: Option<String>,
    pub processor_response_code: Option<String>,
    pub processor_response_text: Option<String>,
    pub processor_authorization_code: Option<String>,
    pub processor_settlement_response_code: Option<String>,
    pub processor_settlement_response_text: Option<String>,
    pub gateway_rejection_reason: Option<String>,
    pub avs_error_response_code: Option<String>,
    pub avs_postal_code_response_code: Option<String>,
    pub avs_street_address_response_code: Option<String>,
    pub cvv_response_code: Option<String>,
    #[serde(rename = "credit_card")]
    pub credit_card_details: Option<CreditCardDetails>,
    #[serde(rename = "paypal")]
    pub paypal_details: Option<PayPalDetails>,
    #[serde(rename = "customer")]
    pub customer_details: Option<CustomerDetails>,
    #[serde(rename = "billing")]
    pub billing_details: Option<Address>,
    #[serde(rename = "shipping")]
    pub shipping_details: Option<Address>,
    pub disbursement_details: Option<DisbursementDetails>,
    pub risk_data: Option<RiskData>,
    pub three_d_secure_info: Option<ThreeDSecureInfo>,
    pub descriptor: Option<Descriptor>,
    #[serde(default)]
    pub disputes: Vec<Dispute>,
    #[serde(default)]
    pub status_history: Vec<StatusEvent>,
    #[serde(default)]
    pub custom_fields: HashMap<String, String>,
    pub service_fee_amount: Option<Decimal>,
    pub tax_amount: Option<Decimal>,
    pub tax_exempt: Option<bool>,
    pub shipping_amount: Option<Decimal>,
    pub discount_amount: Option<Decimal>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[async_trait]
impl Pollable for Transaction {
    type Output = Transaction;

    async fn poll_once(&self, client: &BraintreeClient) -> Result<Self::Output, Error> {
        client.transactions.find(&self.id).await
    }
}

impl IsInTerminalState for Transaction {
    fn is_in_terminal_state(&self) -> bool {
        self.status.is_terminal()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Sale,
    Credit,
    #[default]
    #[serde(other)]
    Unrecognized,
}

/// Lifecycle state of a transaction.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    AuthorizationExpired,
    Authorizing,
    Authorized,
    GatewayRejected,
    Failed,
    ProcessorDeclined,
    Settled,
    SettlementConfirmed,
    SettlementDeclined,
    SettlementPending,
    Settling,
    SubmittedForSettlement,
    Voided,
    #[default]
    #[serde(other)]
    Unrecognized,
}

impl Status {
    /// Whether no further transition can happen without a new operation.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Status::Settled
                | Status::SettlementDeclined
                | Status::Voided
                | Status::ProcessorDeclined
                | Status::GatewayRejected
                | Status::Failed
                | Status::AuthorizationExpired
        )
    }
}

/// Escrow state of a marketplace transaction, orthogonal to [`Status`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum EscrowStatus {
    HoldPending,
    Held,
    ReleasePending,
    Released,
    Refunded,
    #[serde(other)]
    Unrecognized,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct StatusEvent {
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub status: Status,
    pub timestamp: Option<DateTime<Utc>>,
    pub transaction_source: Option<String>,
    pub user: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct CustomerDetails {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub fax: Option<String>,
    pub website: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct PayPalDetails {
    pub token: Option<String>,
    pub payer_email: Option<String>,
    pub payer_id: Option<String>,
    pub payer_first_name: Option<String>,
    pub payer_last_name: Option<String>,
    pub payment_id: Option<String>,
    pub authorization_id: Option<String>,
    pub capture_id: Option<String>,
    pub refund_id: Option<String>,
    pub custom_field: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub seller_protection_status: Option<String>,
    pub transaction_fee_amount: Option<Decimal>,
    pub transaction_fee_currency_iso_code: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct DisbursementDetails {
    pub disbursement_date: Option<NaiveDate>,
    pub settlement_amount: Option<Decimal>,
    pub settlement_currency_iso_code: Option<String>,
    pub settlement_currency_exchange_rate: Option<Decimal>,
    pub funds_held: Option<bool>,
    pub success: Option<bool>,
}

impl DisbursementDetails {
    /// Whether the funds of the transaction have been disbursed.
    pub fn is_valid(&self) -> bool {
        self.disbursement_date.is_some()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct RiskData {
    pub id: Option<String>,
    pub decision: Option<String>,
    pub device_data_captured: Option<bool>,
    pub fraud_service_provider: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct ThreeDSecureInfo {
    pub status: Option<String>,
    pub enrolled: Option<String>,
    pub liability_shifted: Option<bool>,
    pub liability_shift_possible: Option<bool>,
    pub cavv: Option<String>,
    pub xid: Option<String>,
    pub eci_flag: Option<String>,
    pub three_d_secure_version: Option<String>,
    pub ds_transaction_id: Option<String>,
}

/// Dynamic descriptor shown on the cardholder statement.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct Descriptor {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub url: Option<String>,
}

/// Item of a level 3 transaction.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct LineItem {
    pub name: Option<String>,
    #[serde(default)]
    pub kind: LineItemKind,
    pub quantity: Option<Decimal>,
    pub unit_amount: Option<Decimal>,
    pub total_amount: Option<Decimal>,
    pub unit_tax_amount: Option<Decimal>,
    pub discount_amount: Option<Decimal>,
    pub tax_amount: Option<Decimal>,
    pub unit_of_measure: Option<String>,
    pub product_code: Option<String>,
    pub commodity_code: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Default)]
#[serde(rename_all = "snake_case")]
pub enum LineItemKind {
    #[default]
    Debit,
    Credit,
}

/// Fields of a new sale or credit. The transaction type is set by the operation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct TransactionRequest {
    pub amount: Option<Decimal>,
    pub order_id: Option<String>,
    pub merchant_account_id: Option<String>,
    pub service_fee_amount: Option<Decimal>,
    pub tax_amount: Option<Decimal>,
    pub tax_exempt: Option<bool>,
    pub shipping_amount: Option<Decimal>,
    pub discount_amount: Option<Decimal>,
    pub purchase_order_number: Option<String>,
    pub channel: Option<String>,
    pub recurring: Option<bool>,
    pub device_data: Option<String>,
    pub payment_method_token: Option<String>,
    pub payment_method_nonce: Option<String>,
    pub customer_id: Option<String>,
    pub subscription_id: Option<String>,
    pub billing_address_id: Option<String>,
    pub shipping_address_id: Option<String>,
    pub credit_card: Option<TransactionCreditCard>,
    pub customer: Option<CustomerDetails>,
    pub billing: Option<AddressRequest>,
    pub shipping: Option<AddressRequest>,
    pub custom_fields: Option<HashMap<String, String>>,
    pub line_items: Option<Vec<LineItem>>,
    pub descriptor: Option<Descriptor>,
    pub three_d_secure_pass_thru: Option<ThreeDSecurePassThru>,
    pub industry: Option<IndustryData>,
    pub options: Option<TransactionOptions>,
}

/// Card submitted inline with a transaction, without vaulting it first.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct TransactionCreditCard {
    pub number: Option<String>,
    pub cvv: Option<String>,
    pub expiration_date: Option<String>,
    pub expiration_month: Option<String>,
    pub expiration_year: Option<String>,
    pub cardholder_name: Option<String>,
    /// Token to vault the card under when `store_in_vault` is set.
    pub token: Option<String>,
}

/// 3-D Secure authentication data obtained outside of the gateway.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct ThreeDSecurePassThru {
    pub eci_flag: Option<String>,
    pub cavv: Option<String>,
    pub xid: Option<String>,
    pub three_d_secure_version: Option<String>,
    pub authentication_response: Option<String>,
    pub directory_response: Option<String>,
    pub cavv_algorithm: Option<String>,
    pub ds_transaction_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct IndustryData {
    pub industry_type: IndustryType,
    pub data: IndustryFields,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum IndustryType {
    Lodging,
    TravelCruise,
    TravelFlight,
}

/// Industry specific fields. Which ones are required depends on the [`IndustryType`].
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct IndustryFields {
    pub folio_number: Option<String>,
    pub check_in_date: Option<NaiveDate>,
    pub check_out_date: Option<NaiveDate>,
    pub room_rate: Option<Decimal>,
    pub travel_package: Option<String>,
    pub departure_date: Option<NaiveDate>,
    pub lodging_check_in_date: Option<NaiveDate>,
    pub lodging_check_out_date: Option<NaiveDate>,
    pub lodging_name: Option<String>,
    pub passenger_first_name: Option<String>,
    pub passenger_last_name: Option<String>,
    pub ticket_number: Option<String>,
    pub issued_date: Option<NaiveDate>,
    pub travel_agency_name: Option<String>,
    pub fare_amount: Option<Decimal>,
    pub legs: Option<Vec<FlightLeg>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct FlightLeg {
    pub conjunction_ticket: Option<String>,
    pub carrier_code: Option<String>,
    pub flight_number: Option<String>,
    pub departure_date: Option<NaiveDate>,
    pub departure_airport_code: Option<String>,
    pub arrival_airport_code: Option<String>,
    pub fare_amount: Option<Decimal>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct TransactionOptions {
    pub submit_for_settlement: Option<bool>,
    pub store_in_vault: Option<bool>,
    pub store_in_vault_on_success: Option<bool>,
    pub add_billing_address_to_payment_method: Option<bool>,
    pub store_shipping_address_in_vault: Option<bool>,
    pub hold_in_escrow: Option<bool>,
    pub skip_avs: Option<bool>,
    pub skip_cvv: Option<bool>,
    pub skip_advanced_fraud_checking: Option<bool>,
    pub paypal: Option<PayPalOptions>,
    pub three_d_secure: Option<ThreeDSecureOptions>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct PayPalOptions {
    pub custom_field: Option<String>,
    pub description: Option<String>,
    pub payee_email: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct ThreeDSecureOptions {
    pub required: Option<bool>,
}

/// Overrides applied when cloning a transaction.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct CloneTransactionRequest {
    pub amount: Option<Decimal>,
    pub channel: Option<String>,
    pub options: Option<CloneTransactionOptions>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct CloneTransactionOptions {
    pub submit_for_settlement: Option<bool>,
}

/// Details that can still be changed on a transaction submitted for settlement.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct UpdateDetailsRequest {
    pub amount: Option<Decimal>,
    pub order_id: Option<String>,
    pub descriptor: Option<Descriptor>,
}

/// Settlement or refund of a transaction, partial when `amount` is set.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
pub(crate) struct AmountRequest {
    pub(crate) amount: Option<Decimal>,
}

/// A [`TransactionRequest`] tagged with the transaction type.
#[derive(Serialize, Debug)]
pub(crate) struct TypedTransactionRequest<'a> {
    #[serde(rename = "type")]
    pub(crate) kind: TransactionType,
    #[serde(flatten)]
    pub(crate) request: &'a TransactionRequest,
}
