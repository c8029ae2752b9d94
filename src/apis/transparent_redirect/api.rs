use crate::{
    apis::{
        credit_cards::CreditCardRequest,
        customers::CustomerRequest,
        require_id,
        transactions::{TransactionRequest, TransactionType, TypedTransactionRequest},
        transparent_redirect::{ConfirmResult, Kind, RedirectQuery},
        BraintreeClientInner,
    },
    common::API_VERSION,
    digest::{self, Algorithm},
    query_string::{parse_query_string, to_query_string},
    Error,
};
use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use urlencoding::encode;

/// Transparent redirect helpers.
///
/// A browser posts a form holding the signed `tr_data` and the user input straight to
/// [`url`](Self::url). The gateway then redirects back to the merchant with a signed
/// query string, which [`confirm`](Self::confirm) turns into a result.
#[derive(Clone, Debug)]
pub struct TransparentRedirectApi {
    inner: Arc<BraintreeClientInner>,
}

impl TransparentRedirectApi {
    pub(crate) fn new(inner: Arc<BraintreeClientInner>) -> Self {
        Self { inner }
    }

    /// URL the forms post to.
    pub fn url(&self) -> Result<String, Error> {
        Ok(format!(
            "{}/transparent_redirect_requests",
            self.inner.configuration.merchant_url()?
        ))
    }

    /// Signs `params` for a form redirecting to `redirect_url`.
    ///
    /// Returns `"{signature}|{query}"`, where the query holds `params` in bracket
    /// notation followed by the API version, public key, redirect URL and time.
    pub fn tr_data<T: Serialize + ?Sized>(
        &self,
        params: &T,
        redirect_url: &str,
    ) -> Result<String, Error> {
        let configuration = &self.inner.configuration;

        let mut data = match serde_json::to_value(params)? {
            Value::Object(fields) => fields,
            _ => {
                return Err(Error::InvalidArgument(
                    "Transparent redirect params must be a map".to_string(),
                ))
            }
        };
        data.insert("api_version".into(), API_VERSION.into());
        data.insert("public_key".into(), configuration.public_key()?.into());
        data.insert("redirect_url".into(), redirect_url.into());
        data.insert(
            "time".into(),
            Utc::now().format("%Y%m%d%H%M%S").to_string().into(),
        );

        let query = to_query_string(&data)?;
        let signature = digest::hexdigest(
            Algorithm::Sha1,
            configuration.private_key()?.expose_secret(),
            &query,
        )?;

        Ok(format!("{}|{}", signature, query))
    }

    pub fn create_customer_data(
        &self,
        customer: &CustomerRequest,
        redirect_url: &str,
    ) -> Result<String, Error> {
        self.tr_data(
            &json!({ "customer": customer, "kind": Kind::CreateCustomer }),
            redirect_url,
        )
    }

    pub fn update_customer_data(
        &self,
        customer_id: &str,
        customer: &CustomerRequest,
        redirect_url: &str,
    ) -> Result<String, Error> {
        self.tr_data(
            &json!({
                "customer_id": require_id(customer_id)?,
                "customer": customer,
                "kind": Kind::UpdateCustomer
            }),
            redirect_url,
        )
    }

    /// Signs a card creation. The card must name the customer it belongs to.
    pub fn create_credit_card_data(
        &self,
        credit_card: &CreditCardRequest,
        redirect_url: &str,
    ) -> Result<String, Error> {
        if credit_card.customer_id.is_none() {
            return Err(Error::InvalidArgument(
                "customer_id is required when creating a credit card".to_string(),
            ));
        }

        self.tr_data(
            &json!({ "credit_card": credit_card, "kind": Kind::CreatePaymentMethod }),
            redirect_url,
        )
    }

    pub fn update_credit_card_data(
        &self,
        token: &str,
        credit_card: &CreditCardRequest,
        redirect_url: &str,
    ) -> Result<String, Error> {
        self.tr_data(
            &json!({
                "payment_method_token": require_id(token)?,
                "credit_card": credit_card,
                "kind": Kind::UpdatePaymentMethod
            }),
            redirect_url,
        )
    }

    pub fn transaction_data(
        &self,
        kind: TransactionType,
        transaction: &TransactionRequest,
        redirect_url: &str,
    ) -> Result<String, Error> {
        if !matches!(kind, TransactionType::Sale | TransactionType::Credit) {
            return Err(Error::InvalidArgument(
                "Transaction type must be sale or credit".to_string(),
            ));
        }

        let transaction = TypedTransactionRequest {
            kind,
            request: transaction,
        };
        self.tr_data(
            &json!({ "transaction": transaction, "kind": Kind::CreateTransaction }),
            redirect_url,
        )
    }

    /// Checks the query string of a redirect back from the gateway.
    ///
    /// Fails with the error matching `http_status` when the gateway reported a failure,
    /// and with [`Error::InvalidSignature`](crate::Error::InvalidSignature) when the
    /// `hash` parameter does not sign the rest of the query.
    pub fn parse_and_validate_query_string(&self, query: &str) -> Result<RedirectQuery, Error> {
        let query = query.trim_start_matches('?');
        let params: std::collections::HashMap<String, String> =
            parse_query_string(query)?.into_iter().collect();

        let http_status = params.get("http_status").ok_or_else(|| {
            Error::InvalidArgument("Expected query string to have an http_status param".to_string())
        })?;
        if http_status != "200" {
            let status = http_status.parse::<u16>().map_err(|_| {
                Error::InvalidArgument(format!("Invalid http_status: {}", http_status))
            })?;
            return Err(Error::from_status(status).unwrap_or(Error::UnexpectedStatus(status)));
        }

        let signature = params
            .get("hash")
            .ok_or_else(|| Error::InvalidSignature("Query string is not signed".to_string()))?;
        let unsigned = query
            .split('&')
            .filter(|pair| !pair.starts_with("hash="))
            .collect::<Vec<_>>()
            .join("&");

        let configuration = &self.inner.configuration;
        if !digest::verify(
            Algorithm::Sha1,
            configuration.private_key()?.expose_secret(),
            &unsigned,
            signature,
        )? {
            tracing::warn!("Rejected forged transparent redirect query string");
            return Err(Error::InvalidSignature(
                "Query string hash does not match".to_string(),
            ));
        }

        Ok(RedirectQuery::new(params))
    }

    /// Validates the redirect query string and confirms the pending request.
    #[tracing::instrument(name = "Confirm Transparent Redirect", skip_all)]
    pub async fn confirm(&self, query: &str) -> Result<ConfirmResult, Error> {
        let query = self.parse_and_validate_query_string(query)?;
        let id = query
            .id()
            .ok_or_else(|| Error::InvalidArgument("Query string has no id".to_string()))?;

        let document = self
            .inner
            .post(
                &format!(
                    "/transparent_redirect_requests/{}/confirm",
                    encode(require_id(id)?)
                ),
                None,
            )
            .await?;

        Ok(match query.kind()? {
            Kind::CreateCustomer | Kind::UpdateCustomer => {
                ConfirmResult::Customer(document.into_result("customer")?)
            }
            Kind::CreatePaymentMethod | Kind::UpdatePaymentMethod => {
                ConfirmResult::CreditCard(document.into_result("credit_card")?)
            }
            Kind::CreateTransaction => {
                ConfirmResult::Transaction(document.into_result("transaction")?)
            }
        })
    }
}
