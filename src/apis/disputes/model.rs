use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Dispute opened by a cardholder or by the card issuer against a transaction.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Dispute {
    pub id: String,
    pub amount_disputed: Option<Decimal>,
    pub amount_won: Option<Decimal>,
    pub case_number: Option<String>,
    pub currency_iso_code: Option<String>,
    #[serde(default)]
    pub kind: DisputeKind,
    pub reason: Option<String>,
    pub reason_code: Option<String>,
    #[serde(default)]
    pub status: DisputeStatus,
    pub merchant_account_id: Option<String>,
    #[serde(default)]
    pub evidence: Vec<DisputeEvidence>,
    pub transaction: Option<DisputeTransaction>,
    pub received_date: Option<NaiveDate>,
    pub reply_by_date: Option<NaiveDate>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DisputeKind {
    Chargeback,
    PreArbitration,
    Retrieval,
    #[default]
    #[serde(other)]
    Unrecognized,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DisputeStatus {
    Accepted,
    Disputed,
    Expired,
    Open,
    Lost,
    Won,
    #[default]
    #[serde(other)]
    Unrecognized,
}

/// Evidence submitted to contest a dispute, either a comment or a document.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct DisputeEvidence {
    pub id: String,
    pub comment: Option<String>,
    pub url: Option<String>,
    pub category: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub sent_to_processor_at: Option<NaiveDate>,
}

/// Summary of the disputed transaction.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct DisputeTransaction {
    pub id: String,
    pub amount: Option<Decimal>,
    pub order_id: Option<String>,
    pub purchase_order_number: Option<String>,
    pub payment_instrument_subtype: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}
