use crate::{
    apis::{
        merchant_accounts::{
            CurrencyRequest, MerchantAccount, MerchantAccountRequest, MerchantAccountsPage,
        },
        require_id, BraintreeClientInner, Document,
    },
    result::GatewayResult,
    xml, Error,
};
use std::sync::Arc;
use urlencoding::encode;

/// Merchant accounts APIs client.
#[derive(Clone, Debug)]
pub struct MerchantAccountsApi {
    inner: Arc<BraintreeClientInner>,
}

impl MerchantAccountsApi {
    pub(crate) fn new(inner: Arc<BraintreeClientInner>) -> Self {
        Self { inner }
    }

    /// Onboards a sub-merchant under a master merchant account.
    #[tracing::instrument(name = "Create Merchant Account", skip(self, request))]
    pub async fn create(
        &self,
        request: &MerchantAccountRequest,
    ) -> Result<GatewayResult<MerchantAccount>, Error> {
        self.inner
            .post(
                "/merchant_accounts/create_via_api",
                Some(xml::to_xml("merchant_account", request)?),
            )
            .await?
            .into_result("merchant_account")
    }

    /// Same as [`create`](Self::create), failing with
    /// [`Error::ValidationsFailed`](crate::Error::ValidationsFailed) on validation errors.
    pub async fn create_strict(
        &self,
        request: &MerchantAccountRequest,
    ) -> Result<MerchantAccount, Error> {
        self.create(request).await?.into_result()
    }

    #[tracing::instrument(name = "Update Merchant Account", skip(self, request))]
    pub async fn update(
        &self,
        id: &str,
        request: &MerchantAccountRequest,
    ) -> Result<GatewayResult<MerchantAccount>, Error> {
        self.inner
            .put(
                &format!("{}/update_via_api", merchant_account_path(id)?),
                Some(xml::to_xml("merchant_account", request)?),
            )
            .await?
            .into_result("merchant_account")
    }

    pub async fn update_strict(
        &self,
        id: &str,
        request: &MerchantAccountRequest,
    ) -> Result<MerchantAccount, Error> {
        self.update(id, request).await?.into_result()
    }

    #[tracing::instrument(name = "Get Merchant Account by ID", skip(self))]
    pub async fn find(&self, id: &str) -> Result<MerchantAccount, Error> {
        self.inner
            .get(&merchant_account_path(id)?)
            .await?
            .into_entity("merchant_account")
    }

    /// Creates a merchant account processing in `currency`, with a generated id when `id` is `None`.
    #[tracing::instrument(name = "Create Merchant Account for currency", skip(self))]
    pub async fn create_for_currency(
        &self,
        currency: &str,
        id: Option<&str>,
    ) -> Result<GatewayResult<MerchantAccount>, Error> {
        self.inner
            .post(
                "/merchant_accounts/create_for_currency",
                Some(xml::to_xml("merchant_account", &CurrencyRequest { currency, id })?),
            )
            .await?
            .into_result_with(|document| match document.root.as_str() {
                // The account is wrapped in a generic <response> element
                "response" => Document {
                    root: "merchant_account".to_string(),
                    value: document
                        .value
                        .get("merchant_account")
                        .cloned()
                        .unwrap_or_default(),
                }
                .into_entity("merchant_account"),
                _ => document.into_entity("merchant_account"),
            })
    }

    pub async fn create_for_currency_strict(
        &self,
        currency: &str,
        id: Option<&str>,
    ) -> Result<MerchantAccount, Error> {
        self.create_for_currency(currency, id).await?.into_result()
    }

    /// Lists all the merchant accounts, reading every page.
    #[tracing::instrument(name = "List Merchant Accounts", skip(self))]
    pub async fn all(&self) -> Result<Vec<MerchantAccount>, Error> {
        let mut merchant_accounts = Vec::new();

        for page_number in 1.. {
            let page: MerchantAccountsPage = self
                .inner
                .get(&format!("/merchant_accounts?page={}", page_number))
                .await?
                .into_entity("merchant_accounts")?;

            let page_len = page.merchant_account.len();
            merchant_accounts.extend(page.merchant_account);

            let total_items = page.total_items.unwrap_or_default();
            if page_len == 0 || merchant_accounts.len() as i64 >= total_items {
                break;
            }
        }

        Ok(merchant_accounts)
    }
}

fn merchant_account_path(id: &str) -> Result<String, Error> {
    Ok(format!("/merchant_accounts/{}", encode(require_id(id)?)))
}
