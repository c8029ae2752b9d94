use crate::apis::transactions::{Descriptor, Transaction};
use chrono::{DateTime, NaiveDate, Utc};
use derive_builder::Builder;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Recurring billing of a vaulted payment method according to a plan.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Subscription {
    pub id: String,
    pub plan_id: Option<String>,
    #[serde(default)]
    pub status: SubscriptionStatus,
    pub price: Option<Decimal>,
    pub balance: Option<Decimal>,
    pub payment_method_token: Option<String>,
    pub merchant_account_id: Option<String>,
    pub current_billing_cycle: Option<i64>,
    pub number_of_billing_cycles: Option<i64>,
    pub never_expires: Option<bool>,
    pub failure_count: Option<i64>,
    pub days_past_due: Option<i64>,
    pub billing_day_of_month: Option<i64>,
    pub billing_period_start_date: Option<NaiveDate>,
    pub billing_period_end_date: Option<NaiveDate>,
    pub first_billing_date: Option<NaiveDate>,
    pub next_billing_date: Option<NaiveDate>,
    pub paid_through_date: Option<NaiveDate>,
    pub next_bill_amount: Option<Decimal>,
    pub next_billing_period_amount: Option<Decimal>,
    pub trial_period: Option<bool>,
    pub trial_duration: Option<i64>,
    pub trial_duration_unit: Option<DurationUnit>,
    pub descriptor: Option<Descriptor>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum SubscriptionStatus {
    Active,
    Canceled,
    Expired,
    #[serde(rename = "Past Due")]
    PastDue,
    Pending,
    #[default]
    #[serde(other)]
    Unrecognized,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum DurationUnit {
    Day,
    Month,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, Builder)]
#[builder(default, setter(into, strip_option))]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct SubscriptionRequest {
    pub id: Option<String>,
    pub plan_id: Option<String>,
    pub payment_method_token: Option<String>,
    pub payment_method_nonce: Option<String>,
    /// Overrides the price of the plan.
    pub price: Option<Decimal>,
    pub merchant_account_id: Option<String>,
    pub number_of_billing_cycles: Option<i64>,
    pub never_expires: Option<bool>,
    pub billing_day_of_month: Option<i64>,
    pub first_billing_date: Option<NaiveDate>,
    pub trial_period: Option<bool>,
    pub trial_duration: Option<i64>,
    pub trial_duration_unit: Option<DurationUnit>,
    pub descriptor: Option<Descriptor>,
    pub options: Option<SubscriptionOptions>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct SubscriptionOptions {
    pub do_not_inherit_add_ons_or_discounts: Option<bool>,
    pub start_immediately: Option<bool>,
    pub prorate_charges: Option<bool>,
    pub replace_all_add_ons_and_discounts: Option<bool>,
    pub revert_subscription_on_proration_failure: Option<bool>,
}
