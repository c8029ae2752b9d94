use crate::{
    apis::{
        address::{Address, AddressRequest},
        require_id, BraintreeClientInner,
    },
    result::GatewayResult,
    xml, Error,
};
use std::sync::Arc;
use urlencoding::encode;

/// Customer addresses APIs client.
#[derive(Clone, Debug)]
pub struct AddressApi {
    inner: Arc<BraintreeClientInner>,
}

impl AddressApi {
    pub(crate) fn new(inner: Arc<BraintreeClientInner>) -> Self {
        Self { inner }
    }

    /// Adds a new address to an existing customer.
    #[tracing::instrument(name = "Create Address", skip(self, request))]
    pub async fn create(
        &self,
        customer_id: &str,
        request: &AddressRequest,
    ) -> Result<GatewayResult<Address>, Error> {
        self.inner
            .post(
                &format!("/customers/{}/addresses", encode(require_id(customer_id)?)),
                Some(xml::to_xml("address", request)?),
            )
            .await?
            .into_result("address")
    }

    /// Same as [`create`](Self::create), failing with
    /// [`Error::ValidationsFailed`](crate::Error::ValidationsFailed) on validation errors.
    pub async fn create_strict(
        &self,
        customer_id: &str,
        request: &AddressRequest,
    ) -> Result<Address, Error> {
        self.create(customer_id, request).await?.into_result()
    }

    /// Gets an address of a customer.
    #[tracing::instrument(name = "Get Address by ID", skip(self))]
    pub async fn find(&self, customer_id: &str, address_id: &str) -> Result<Address, Error> {
        self.inner
            .get(&address_path(customer_id, address_id)?)
            .await?
            .into_entity("address")
    }

    /// Updates an address of a customer.
    #[tracing::instrument(name = "Update Address", skip(self, request))]
    pub async fn update(
        &self,
        customer_id: &str,
        address_id: &str,
        request: &AddressRequest,
    ) -> Result<GatewayResult<Address>, Error> {
        self.inner
            .put(
                &address_path(customer_id, address_id)?,
                Some(xml::to_xml("address", request)?),
            )
            .await?
            .into_result("address")
    }

    pub async fn update_strict(
        &self,
        customer_id: &str,
        address_id: &str,
        request: &AddressRequest,
    ) -> Result<Address, Error> {
        self.update(customer_id, address_id, request)
            .await?
            .into_result()
    }

    /// Deletes an address of a customer.
    #[tracing::instrument(name = "Delete Address", skip(self))]
    pub async fn delete(
        &self,
        customer_id: &str,
        address_id: &str,
    ) -> Result<GatewayResult<()>, Error> {
        self.inner
            .delete(&address_path(customer_id, address_id)?)
            .await?
            .into_unit_result()
    }

    pub async fn delete_strict(&self, customer_id: &str, address_id: &str) -> Result<(), Error> {
        self.delete(customer_id, address_id).await?.into_result()
    }
}

fn address_path(customer_id: &str, address_id: &str) -> Result<String, Error> {
    Ok(format!(
        "/customers/{}/addresses/{}",
        encode(require_id(customer_id)?),
        encode(require_id(address_id)?)
    ))
}
