use crate::{
    apis::{
        require_id,
        subscriptions::{Subscription, SubscriptionRequest},
        transactions::{
            Transaction, TransactionOptions, TransactionRequest, TransactionType,
            TypedTransactionRequest,
        },
        BraintreeClientInner,
    },
    result::GatewayResult,
    xml, Error,
};
use rust_decimal::Decimal;
use std::sync::Arc;
use urlencoding::encode;

/// Subscriptions APIs client.
#[derive(Clone, Debug)]
pub struct SubscriptionsApi {
    inner: Arc<BraintreeClientInner>,
}

impl SubscriptionsApi {
    pub(crate) fn new(inner: Arc<BraintreeClientInner>) -> Self {
        Self { inner }
    }

    #[tracing::instrument(name = "Create Subscription", skip(self, request))]
    pub async fn create(
        &self,
        request: &SubscriptionRequest,
    ) -> Result<GatewayResult<Subscription>, Error> {
        self.inner
            .post("/subscriptions", Some(xml::to_xml("subscription", request)?))
            .await?
            .into_result("subscription")
    }

    /// Same as [`create`](Self::create), failing with
    /// [`Error::ValidationsFailed`](crate::Error::ValidationsFailed) on validation errors.
    pub async fn create_strict(&self, request: &SubscriptionRequest) -> Result<Subscription, Error> {
        self.create(request).await?.into_result()
    }

    #[tracing::instrument(name = "Get Subscription by ID", skip(self))]
    pub async fn find(&self, id: &str) -> Result<Subscription, Error> {
        self.inner
            .get(&subscription_path(id)?)
            .await?
            .into_entity("subscription")
    }

    #[tracing::instrument(name = "Update Subscription", skip(self, request))]
    pub async fn update(
        &self,
        id: &str,
        request: &SubscriptionRequest,
    ) -> Result<GatewayResult<Subscription>, Error> {
        self.inner
            .put(
                &subscription_path(id)?,
                Some(xml::to_xml("subscription", request)?),
            )
            .await?
            .into_result("subscription")
    }

    pub async fn update_strict(
        &self,
        id: &str,
        request: &SubscriptionRequest,
    ) -> Result<Subscription, Error> {
        self.update(id, request).await?.into_result()
    }

    /// Cancels a subscription. Canceled subscriptions cannot be reactivated.
    #[tracing::instrument(name = "Cancel Subscription", skip(self))]
    pub async fn cancel(&self, id: &str) -> Result<GatewayResult<Subscription>, Error> {
        self.inner
            .put(&format!("{}/cancel", subscription_path(id)?), None)
            .await?
            .into_result("subscription")
    }

    pub async fn cancel_strict(&self, id: &str) -> Result<Subscription, Error> {
        self.cancel(id).await?.into_result()
    }

    /// Charges a past due subscription again, for its balance or for `amount`.
    #[tracing::instrument(name = "Retry Subscription charge", skip(self))]
    pub async fn retry_charge(
        &self,
        id: &str,
        amount: Option<Decimal>,
        submit_for_settlement: bool,
    ) -> Result<GatewayResult<Transaction>, Error> {
        let request = TransactionRequest {
            amount,
            subscription_id: Some(require_id(id)?.to_string()),
            options: Some(TransactionOptions {
                submit_for_settlement: Some(submit_for_settlement),
                ..Default::default()
            }),
            ..Default::default()
        };
        let body = xml::to_xml(
            "transaction",
            &TypedTransactionRequest {
                kind: TransactionType::Sale,
                request: &request,
            },
        )?;

        self.inner
            .post("/transactions", Some(body))
            .await?
            .into_result("transaction")
    }

    pub async fn retry_charge_strict(
        &self,
        id: &str,
        amount: Option<Decimal>,
        submit_for_settlement: bool,
    ) -> Result<Transaction, Error> {
        self.retry_charge(id, amount, submit_for_settlement)
            .await?
            .into_result()
    }
}

fn subscription_path(id: &str) -> Result<String, Error> {
    Ok(format!("/subscriptions/{}", encode(require_id(id)?)))
}
