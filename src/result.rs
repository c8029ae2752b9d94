//! Results of mutating gateway operations and the validation error tree.

use crate::{
    apis::{
        merchant_accounts::MerchantAccount, transactions::Transaction,
        verifications::CreditCardVerification,
    },
    Error,
};
use serde::Deserialize;
use serde_json::Value;
use std::sync::OnceLock;

/// Outcome of a mutating gateway operation.
///
/// The gateway answers invalid input with a well-formed error document rather than
/// with a transport failure, so a failed validation is a regular value here.
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayResult<T> {
    /// The operation succeeded and returned the resulting entity.
    Success(T),
    /// The gateway rejected the operation.
    Failure(Box<ErrorResult>),
}

impl<T> GatewayResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, GatewayResult::Success(_))
    }

    /// Returns the successful entity, if any.
    pub fn success(&self) -> Option<&T> {
        match self {
            GatewayResult::Success(entity) => Some(entity),
            GatewayResult::Failure(_) => None,
        }
    }

    /// Returns the error document, if the operation failed.
    pub fn failure(&self) -> Option<&ErrorResult> {
        match self {
            GatewayResult::Success(_) => None,
            GatewayResult::Failure(error_result) => Some(error_result),
        }
    }

    /// Converts this result into a plain `Result`, turning a failure
    /// into [`Error::ValidationsFailed`](crate::Error::ValidationsFailed).
    pub fn into_result(self) -> Result<T, Error> {
        match self {
            GatewayResult::Success(entity) => Ok(entity),
            GatewayResult::Failure(error_result) => Err(Error::ValidationsFailed(error_result)),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> GatewayResult<U> {
        match self {
            GatewayResult::Success(entity) => GatewayResult::Success(f(entity)),
            GatewayResult::Failure(error_result) => GatewayResult::Failure(error_result),
        }
    }
}

/// Error document returned by the gateway when an operation fails.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorResult {
    /// Human readable summary of all the errors.
    pub message: String,
    /// Validation errors, indexed by object path.
    pub errors: ValidationErrors,
    /// The parameters the gateway received, echoed back without sensitive fields.
    pub params: Value,
    /// Transaction created by the failed operation, e.g. on a processor decline.
    pub transaction: Option<Transaction>,
    /// Verification that failed while vaulting a card.
    pub credit_card_verification: Option<CreditCardVerification>,
    pub merchant_account: Option<MerchantAccount>,
}

impl ErrorResult {
    /// Decodes the content of an `<api-error-response>` document.
    pub(crate) fn from_value(mut value: Value) -> Result<Self, Error> {
        let message = value
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let errors = value
            .get("errors")
            .map(ValidationErrors::from_value)
            .unwrap_or_default();
        let params = value.get_mut("params").map(Value::take).unwrap_or_default();

        Ok(Self {
            message,
            errors,
            params,
            transaction: take_entity(&mut value, "transaction")?,
            credit_card_verification: take_entity(&mut value, "verification")?,
            merchant_account: take_entity(&mut value, "merchant_account")?,
        })
    }
}

fn take_entity<T: for<'de> Deserialize<'de>>(
    value: &mut Value,
    key: &str,
) -> Result<Option<T>, Error> {
    match value.get_mut(key).map(Value::take) {
        Some(entity) => Ok(Some(serde_json::from_value(entity)?)),
        None => Ok(None),
    }
}

/// A single validation error reported by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ValidationError {
    /// Stable error code, see [`error_codes`](crate::error_codes).
    pub code: String,
    /// Name of the offending attribute, or `base` for errors on the whole object.
    pub attribute: String,
    pub message: String,
}

/// Tree of validation errors.
///
/// Each node holds the errors of one object and the nodes of its nested objects, so
/// `errors.for_object("customer").for_object("credit_card").on("number")` drills down
/// to the errors on a card number submitted inside a customer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
    nested: Vec<(String, ValidationErrors)>,
}

impl ValidationErrors {
    pub(crate) fn from_value(value: &Value) -> Self {
        let mut node = ValidationErrors::default();

        if let Value::Object(fields) = value {
            for (key, field) in fields {
                match (key.as_str(), field) {
                    ("errors", Value::Array(items)) => {
                        node.errors.extend(
                            items
                                .iter()
                                .filter_map(|item| serde_json::from_value(item.clone()).ok()),
                        );
                    }
                    (_, Value::Object(_)) => {
                        node.nested
                            .push((key.clone(), ValidationErrors::from_value(field)));
                    }
                    _ => {}
                }
            }
        }

        node
    }

    /// Returns the node for a nested object.
    ///
    /// Unknown objects yield an empty node so that lookups can be chained freely.
    pub fn for_object(&self, name: &str) -> &ValidationErrors {
        static EMPTY: OnceLock<ValidationErrors> = OnceLock::new();

        self.nested
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, node)| node)
            .unwrap_or_else(|| EMPTY.get_or_init(ValidationErrors::default))
    }

    /// Returns the errors on a single attribute of this object.
    pub fn on(&self, attribute: &str) -> Vec<&ValidationError> {
        self.errors
            .iter()
            .filter(|e| e.attribute == attribute)
            .collect()
    }

    /// Returns the errors on the object as a whole.
    pub fn on_base(&self) -> Vec<&ValidationError> {
        self.on("base")
    }

    /// Errors on this object, excluding nested objects.
    pub fn shallow_errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// All errors in this subtree, depth first.
    pub fn deep_errors(&self) -> Vec<&ValidationError> {
        let mut all: Vec<&ValidationError> = self.errors.iter().collect();
        for (_, node) in &self.nested {
            all.extend(node.deep_errors());
        }
        all
    }

    pub fn deep_size(&self) -> usize {
        self.errors.len() + self.nested.iter().map(|(_, n)| n.deep_size()).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.deep_size() == 0
    }
}
