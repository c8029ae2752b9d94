use crate::{
    apis::{
        disputes::{Dispute, DisputeEvidence},
        require_id, BraintreeClientInner,
    },
    result::GatewayResult,
    xml, Error,
};
use std::sync::Arc;
use urlencoding::encode;

/// Disputes APIs client.
#[derive(Clone, Debug)]
pub struct DisputesApi {
    inner: Arc<BraintreeClientInner>,
}

impl DisputesApi {
    pub(crate) fn new(inner: Arc<BraintreeClientInner>) -> Self {
        Self { inner }
    }

    #[tracing::instrument(name = "Get Dispute by ID", skip(self))]
    pub async fn find(&self, id: &str) -> Result<Dispute, Error> {
        self.inner
            .get(&dispute_path(id)?)
            .await?
            .into_entity("dispute")
    }

    /// Accepts the dispute, conceding the disputed amount.
    #[tracing::instrument(name = "Accept Dispute", skip(self))]
    pub async fn accept(&self, id: &str) -> Result<GatewayResult<()>, Error> {
        self.inner
            .put(&format!("{}/accept", dispute_path(id)?), None)
            .await?
            .into_unit_result()
    }

    pub async fn accept_strict(&self, id: &str) -> Result<(), Error> {
        self.accept(id).await?.into_result()
    }

    /// Submits the evidence added so far. No evidence can be added or removed afterwards.
    #[tracing::instrument(name = "Finalize Dispute", skip(self))]
    pub async fn finalize(&self, id: &str) -> Result<GatewayResult<()>, Error> {
        self.inner
            .put(&format!("{}/finalize", dispute_path(id)?), None)
            .await?
            .into_unit_result()
    }

    pub async fn finalize_strict(&self, id: &str) -> Result<(), Error> {
        self.finalize(id).await?.into_result()
    }

    #[tracing::instrument(name = "Add Dispute text evidence", skip(self, content))]
    pub async fn add_text_evidence(
        &self,
        id: &str,
        content: &str,
    ) -> Result<GatewayResult<DisputeEvidence>, Error> {
        if content.trim().is_empty() {
            return Err(Error::InvalidArgument("content cannot be blank".to_string()));
        }

        self.inner
            .post(
                &format!("{}/evidence", dispute_path(id)?),
                Some(xml::to_xml("comments", content)?),
            )
            .await?
            .into_result("evidence")
    }

    pub async fn add_text_evidence_strict(
        &self,
        id: &str,
        content: &str,
    ) -> Result<DisputeEvidence, Error> {
        self.add_text_evidence(id, content).await?.into_result()
    }

    #[tracing::instrument(name = "Remove Dispute evidence", skip(self))]
    pub async fn remove_evidence(
        &self,
        id: &str,
        evidence_id: &str,
    ) -> Result<GatewayResult<()>, Error> {
        self.inner
            .delete(&format!(
                "{}/evidence/{}",
                dispute_path(id)?,
                encode(require_id(evidence_id)?)
            ))
            .await?
            .into_unit_result()
    }

    pub async fn remove_evidence_strict(&self, id: &str, evidence_id: &str) -> Result<(), Error> {
        self.remove_evidence(id, evidence_id).await?.into_result()
    }
}

fn dispute_path(id: &str) -> Result<String, Error> {
    Ok(format!("/disputes/{}", encode(require_id(id)?)))
}
