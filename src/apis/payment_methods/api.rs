use crate::{
    apis::{
        payment_methods::{PaymentMethod, PaymentMethodRequest},
        require_id, BraintreeClientInner,
    },
    result::GatewayResult,
    xml, Error,
};
use std::sync::Arc;
use urlencoding::encode;

/// Payment methods APIs client, covering every kind of vaulted payment method.
#[derive(Clone, Debug)]
pub struct PaymentMethodsApi {
    inner: Arc<BraintreeClientInner>,
}

impl PaymentMethodsApi {
    pub(crate) fn new(inner: Arc<BraintreeClientInner>) -> Self {
        Self { inner }
    }

    /// Vaults the payment method a nonce refers to for an existing customer.
    #[tracing::instrument(name = "Create Payment Method", skip(self, request))]
    pub async fn create(
        &self,
        request: &PaymentMethodRequest,
    ) -> Result<GatewayResult<PaymentMethod>, Error> {
        if request.customer_id.is_none() || request.payment_method_nonce.is_none() {
            return Err(Error::InvalidArgument(
                "customer_id and payment_method_nonce are required".to_string(),
            ));
        }

        self.inner
            .post(
                "/payment_methods",
                Some(xml::to_xml("payment_method", request)?),
            )
            .await?
            .into_result_with(PaymentMethod::from_document)
    }

    /// Same as [`create`](Self::create), failing with
    /// [`Error::ValidationsFailed`](crate::Error::ValidationsFailed) on validation errors.
    pub async fn create_strict(
        &self,
        request: &PaymentMethodRequest,
    ) -> Result<PaymentMethod, Error> {
        self.create(request).await?.into_result()
    }

    #[tracing::instrument(name = "Get Payment Method by token", skip(self))]
    pub async fn find(&self, token: &str) -> Result<PaymentMethod, Error> {
        PaymentMethod::from_document(self.inner.get(&payment_method_path(token)?).await?)
    }

    #[tracing::instrument(name = "Update Payment Method", skip(self, request))]
    pub async fn update(
        &self,
        token: &str,
        request: &PaymentMethodRequest,
    ) -> Result<GatewayResult<PaymentMethod>, Error> {
        self.inner
            .put(
                &payment_method_path(token)?,
                Some(xml::to_xml("payment_method", request)?),
            )
            .await?
            .into_result_with(PaymentMethod::from_document)
    }

    pub async fn update_strict(
        &self,
        token: &str,
        request: &PaymentMethodRequest,
    ) -> Result<PaymentMethod, Error> {
        self.update(token, request).await?.into_result()
    }

    #[tracing::instrument(name = "Delete Payment Method", skip(self))]
    pub async fn delete(&self, token: &str) -> Result<GatewayResult<()>, Error> {
        self.inner
            .delete(&payment_method_path(token)?)
            .await?
            .into_unit_result()
    }

    pub async fn delete_strict(&self, token: &str) -> Result<(), Error> {
        self.delete(token).await?.into_result()
    }
}

fn payment_method_path(token: &str) -> Result<String, Error> {
    Ok(format!("/payment_methods/any/{}", encode(require_id(token)?)))
}
