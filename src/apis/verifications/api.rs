use crate::{
    apis::{
        require_id,
        verifications::{CreditCardVerification, VerificationRequest},
        BraintreeClientInner,
    },
    result::GatewayResult,
    xml, Error,
};
use std::sync::Arc;
use urlencoding::encode;

/// Credit card verifications APIs client.
#[derive(Clone, Debug)]
pub struct VerificationsApi {
    inner: Arc<BraintreeClientInner>,
}

impl VerificationsApi {
    pub(crate) fn new(inner: Arc<BraintreeClientInner>) -> Self {
        Self { inner }
    }

    /// Verifies a card without storing it.
    ///
    /// A declined verification is a failed result carrying the verification in
    /// [`ErrorResult::credit_card_verification`](crate::result::ErrorResult::credit_card_verification).
    #[tracing::instrument(name = "Create Verification", skip(self, request))]
    pub async fn create(
        &self,
        request: &VerificationRequest,
    ) -> Result<GatewayResult<CreditCardVerification>, Error> {
        self.inner
            .post("/verifications", Some(xml::to_xml("verification", request)?))
            .await?
            .into_result("verification")
    }

    pub async fn create_strict(
        &self,
        request: &VerificationRequest,
    ) -> Result<CreditCardVerification, Error> {
        self.create(request).await?.into_result()
    }

    #[tracing::instrument(name = "Get Verification by ID", skip(self))]
    pub async fn find(&self, id: &str) -> Result<CreditCardVerification, Error> {
        self.inner
            .get(&format!("/verifications/{}", encode(require_id(id)?)))
            .await?
            .into_entity("verification")
    }
}
