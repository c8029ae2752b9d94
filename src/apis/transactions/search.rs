use crate::apis::transactions::Status;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

/// Criteria of a transaction search. Unset criteria are ignored, set ones must all match.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct TransactionSearch {
    pub ids: Option<Vec<String>>,
    pub customer_id: Option<TextCriteria>,
    pub order_id: Option<TextCriteria>,
    pub credit_card_cardholder_name: Option<TextCriteria>,
    pub status: Option<Vec<Status>>,
    pub amount: Option<RangeCriteria<Decimal>>,
    pub created_at: Option<RangeCriteria<DateTime<Utc>>>,
}

/// Matches a text field.
#[derive(Serialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct TextCriteria {
    pub is: Option<String>,
    pub is_not: Option<String>,
    pub starts_with: Option<String>,
    pub ends_with: Option<String>,
    pub contains: Option<String>,
}

impl TextCriteria {
    pub fn is(value: impl Into<String>) -> Self {
        Self {
            is: Some(value.into()),
            ..Default::default()
        }
    }

    pub fn starts_with(value: impl Into<String>) -> Self {
        Self {
            starts_with: Some(value.into()),
            ..Default::default()
        }
    }
}

/// Matches a value within inclusive bounds.
#[derive(Serialize, Debug, Clone, Eq, PartialEq)]
pub struct RangeCriteria<T> {
    pub min: Option<T>,
    pub max: Option<T>,
    pub is: Option<T>,
}

impl<T> RangeCriteria<T> {
    pub fn between(min: T, max: T) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            is: None,
        }
    }

    pub fn at_least(min: T) -> Self {
        Self {
            min: Some(min),
            max: None,
            is: None,
        }
    }

    pub fn at_most(max: T) -> Self {
        Self {
            min: None,
            max: Some(max),
            is: None,
        }
    }

    pub fn is(value: T) -> Self {
        Self {
            min: None,
            max: None,
            is: Some(value),
        }
    }
}
