use crate::{
    apis::{credit_cards::CreditCard, customers::Customer, transactions::Transaction},
    result::GatewayResult,
    Error,
};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt::Display, str::FromStr};

/// Operation carried by a transparent redirect form.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    CreateCustomer,
    UpdateCustomer,
    CreatePaymentMethod,
    UpdatePaymentMethod,
    CreateTransaction,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::CreateCustomer => "create_customer",
            Kind::UpdateCustomer => "update_customer",
            Kind::CreatePaymentMethod => "create_payment_method",
            Kind::UpdatePaymentMethod => "update_payment_method",
            Kind::CreateTransaction => "create_transaction",
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create_customer" => Ok(Kind::CreateCustomer),
            "update_customer" => Ok(Kind::UpdateCustomer),
            "create_payment_method" => Ok(Kind::CreatePaymentMethod),
            "update_payment_method" => Ok(Kind::UpdatePaymentMethod),
            "create_transaction" => Ok(Kind::CreateTransaction),
            other => Err(Error::InvalidArgument(format!(
                "Unknown transparent redirect kind: {}",
                other
            ))),
        }
    }
}

/// Parameters of a redirect back from the gateway, after their signature was checked.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RedirectQuery {
    params: HashMap<String, String>,
}

impl RedirectQuery {
    pub(crate) fn new(params: HashMap<String, String>) -> Self {
        Self { params }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Id of the pending request to confirm.
    pub fn id(&self) -> Option<&str> {
        self.get("id")
    }

    pub fn kind(&self) -> Result<Kind, Error> {
        self.get("kind")
            .ok_or_else(|| Error::InvalidArgument("Query string has no kind".to_string()))?
            .parse()
    }
}

/// Outcome of a confirmed transparent redirect, according to its [`Kind`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmResult {
    Customer(GatewayResult<Customer>),
    CreditCard(GatewayResult<CreditCard>),
    Transaction(GatewayResult<Transaction>),
}

impl ConfirmResult {
    pub fn is_success(&self) -> bool {
        match self {
            ConfirmResult::Customer(res) => res.is_success(),
            ConfirmResult::CreditCard(res) => res.is_success(),
            ConfirmResult::Transaction(res) => res.is_success(),
        }
    }
}
