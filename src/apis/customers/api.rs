use crate::{
    apis::{
        customers::{Customer, CustomerRequest},
        require_id, BraintreeClientInner,
    },
    result::GatewayResult,
    xml, Error,
};
use std::sync::Arc;
use urlencoding::encode;

/// Customers APIs client.
#[derive(Clone, Debug)]
pub struct CustomersApi {
    inner: Arc<BraintreeClientInner>,
}

impl CustomersApi {
    pub(crate) fn new(inner: Arc<BraintreeClientInner>) -> Self {
        Self { inner }
    }

    /// Creates a new customer, optionally vaulting a card at the same time.
    #[tracing::instrument(name = "Create Customer", skip(self, request))]
    pub async fn create(&self, request: &CustomerRequest) -> Result<GatewayResult<Customer>, Error> {
        if let Some(credit_card) = &request.credit_card {
            credit_card.validate_expiration()?;
        }

        self.inner
            .post("/customers", Some(xml::to_xml("customer", request)?))
            .await?
            .into_result("customer")
    }

    /// Same as [`create`](Self::create), failing with
    /// [`Error::ValidationsFailed`](crate::Error::ValidationsFailed) on validation errors.
    pub async fn create_strict(&self, request: &CustomerRequest) -> Result<Customer, Error> {
        self.create(request).await?.into_result()
    }

    #[tracing::instrument(name = "Get Customer by ID", skip(self))]
    pub async fn find(&self, id: &str) -> Result<Customer, Error> {
        self.inner
            .get(&customer_path(id)?)
            .await?
            .into_entity("customer")
    }

    #[tracing::instrument(name = "Update Customer", skip(self, request))]
    pub async fn update(
        &self,
        id: &str,
        request: &CustomerRequest,
    ) -> Result<GatewayResult<Customer>, Error> {
        if let Some(credit_card) = &request.credit_card {
            credit_card.validate_expiration()?;
        }

        self.inner
            .put(&customer_path(id)?, Some(xml::to_xml("customer", request)?))
            .await?
            .into_result("customer")
    }

    pub async fn update_strict(&self, id: &str, request: &CustomerRequest) -> Result<Customer, Error> {
        self.update(id, request).await?.into_result()
    }

    /// Deletes a customer along with its payment methods.
    #[tracing::instrument(name = "Delete Customer", skip(self))]
    pub async fn delete(&self, id: &str) -> Result<GatewayResult<()>, Error> {
        self.inner
            .delete(&customer_path(id)?)
            .await?
            .into_unit_result()
    }

    pub async fn delete_strict(&self, id: &str) -> Result<(), Error> {
        self.delete(id).await?.into_result()
    }
}

fn customer_path(id: &str) -> Result<String, Error> {
    Ok(format!("/customers/{}", encode(require_id(id)?)))
}
