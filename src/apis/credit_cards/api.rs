use crate::{
    apis::{
        credit_cards::{CreditCard, CreditCardRequest},
        require_id, BraintreeClientInner,
    },
    result::GatewayResult,
    xml, Error,
};
use chrono::NaiveDate;
use std::sync::Arc;
use urlencoding::encode;

/// Credit cards APIs client.
#[derive(Clone, Debug)]
pub struct CreditCardsApi {
    inner: Arc<BraintreeClientInner>,
}

impl CreditCardsApi {
    pub(crate) fn new(inner: Arc<BraintreeClientInner>) -> Self {
        Self { inner }
    }

    /// Vaults a new credit card.
    ///
    /// Fails with [`Error::InvalidArgument`](crate::Error::InvalidArgument) before reaching
    /// the gateway if the expiration is given both as a date and as month/year.
    #[tracing::instrument(name = "Create Credit Card", skip(self, request))]
    pub async fn create(
        &self,
        request: &CreditCardRequest,
    ) -> Result<GatewayResult<CreditCard>, Error> {
        request.validate_expiration()?;

        self.inner
            .post("/payment_methods", Some(xml::to_xml("credit_card", request)?))
            .await?
            .into_result("credit_card")
    }

    /// Same as [`create`](Self::create), failing with
    /// [`Error::ValidationsFailed`](crate::Error::ValidationsFailed) on validation errors.
    pub async fn create_strict(&self, request: &CreditCardRequest) -> Result<CreditCard, Error> {
        self.create(request).await?.into_result()
    }

    /// Gets a vaulted credit card by its token.
    #[tracing::instrument(name = "Get Credit Card by token", skip(self))]
    pub async fn find(&self, token: &str) -> Result<CreditCard, Error> {
        self.inner
            .get(&card_path(token)?)
            .await?
            .into_entity("credit_card")
    }

    /// Gets the credit card a nonce refers to, without consuming the nonce.
    #[tracing::instrument(name = "Get Credit Card by nonce", skip(self))]
    pub async fn from_nonce(&self, nonce: &str) -> Result<CreditCard, Error> {
        self.inner
            .get(&format!(
                "/payment_methods/from_nonce/{}",
                encode(require_id(nonce)?)
            ))
            .await?
            .into_entity("credit_card")
    }

    /// Updates a vaulted credit card.
    #[tracing::instrument(name = "Update Credit Card", skip(self, request))]
    pub async fn update(
        &self,
        token: &str,
        request: &CreditCardRequest,
    ) -> Result<GatewayResult<CreditCard>, Error> {
        request.validate_expiration()?;

        self.inner
            .put(&card_path(token)?, Some(xml::to_xml("credit_card", request)?))
            .await?
            .into_result("credit_card")
    }

    pub async fn update_strict(
        &self,
        token: &str,
        request: &CreditCardRequest,
    ) -> Result<CreditCard, Error> {
        self.update(token, request).await?.into_result()
    }

    /// Deletes a vaulted credit card.
    #[tracing::instrument(name = "Delete Credit Card", skip(self))]
    pub async fn delete(&self, token: &str) -> Result<GatewayResult<()>, Error> {
        self.inner
            .delete(&card_path(token)?)
            .await?
            .into_unit_result()
    }

    pub async fn delete_strict(&self, token: &str) -> Result<(), Error> {
        self.delete(token).await?.into_result()
    }

    /// Lists the vaulted credit cards that have expired.
    #[tracing::instrument(name = "List expired Credit Cards", skip(self))]
    pub async fn expired(&self) -> Result<Vec<CreditCard>, Error> {
        self.inner
            .search(
                "/payment_methods/all/expired_ids",
                None,
                "/payment_methods/all/expired",
                "payment_methods",
                "credit_card",
            )
            .await
    }

    /// Lists the vaulted credit cards expiring between the months of `start` and `end`, inclusive.
    #[tracing::instrument(name = "List expiring Credit Cards", skip(self))]
    pub async fn expiring_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<CreditCard>, Error> {
        let query = format!("start={}&end={}", start.format("%m%Y"), end.format("%m%Y"));

        self.inner
            .search(
                &format!("/payment_methods/all/expiring_ids?{}", query),
                None,
                &format!("/payment_methods/all/expiring?{}", query),
                "payment_methods",
                "credit_card",
            )
            .await
    }
}

fn card_path(token: &str) -> Result<String, Error> {
    Ok(format!(
        "/payment_methods/credit_card/{}",
        encode(require_id(token)?)
    ))
}
