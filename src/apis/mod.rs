//! Clients for the various Braintree gateway APIs.

use crate::{
    common::{API_VERSION, USER_AGENT, XML_CONTENT_TYPE, X_API_VERSION_HEADER},
    configuration::Configuration,
    result::{ErrorResult, GatewayResult},
    xml, Error,
};
use reqwest::{
    header::{ACCEPT, CONTENT_TYPE, USER_AGENT as USER_AGENT_HEADER},
    Method,
};
use reqwest_middleware::ClientWithMiddleware;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use std::fmt::{Debug, Formatter};

pub mod address;
pub mod credit_cards;
pub mod customers;
pub mod disputes;
pub mod merchant_accounts;
pub mod oauth;
pub mod payment_methods;
pub mod subscriptions;
pub mod transactions;
pub mod transparent_redirect;
pub mod verifications;

static API_ERROR_RESPONSE: &str = "api_error_response";

pub(crate) struct BraintreeClientInner {
    /// Client authenticated as the merchant, if merchant credentials are configured.
    pub(crate) client: Option<ClientWithMiddleware>,
    /// Client authenticated with the OAuth application credentials, if configured.
    pub(crate) oauth_client: Option<ClientWithMiddleware>,
    pub(crate) configuration: Configuration,
}

impl Debug for BraintreeClientInner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BraintreeClientInner")
            .field("environment", &self.configuration.environment)
            .field("merchant_id", &self.configuration.merchant_id)
            .finish_non_exhaustive()
    }
}

impl BraintreeClientInner {
    fn merchant_client(&self) -> Result<&ClientWithMiddleware, Error> {
        self.client.as_ref().ok_or_else(|| {
            Error::Configuration(
                "Missing public_key and private_key or access_token when constructing BraintreeGateway"
                    .to_string(),
            )
        })
    }

    fn oauth_client(&self) -> Result<&ClientWithMiddleware, Error> {
        // Surface which credential is missing
        self.configuration.client_id()?;
        self.configuration.client_secret()?;

        self.oauth_client.as_ref().ok_or_else(|| {
            Error::Configuration("Missing client credentials".to_string())
        })
    }

    /// `GET` on a merchant-scoped path.
    pub(crate) async fn get(&self, path: &str) -> Result<Document, Error> {
        let url = format!("{}{}", self.configuration.merchant_url()?, path);
        self.send(self.merchant_client()?, Method::GET, url, None)
            .await
    }

    /// `POST` on a merchant-scoped path.
    pub(crate) async fn post(&self, path: &str, body: Option<String>) -> Result<Document, Error> {
        let url = format!("{}{}", self.configuration.merchant_url()?, path);
        self.send(self.merchant_client()?, Method::POST, url, body)
            .await
    }

    /// `PUT` on a merchant-scoped path.
    pub(crate) async fn put(&self, path: &str, body: Option<String>) -> Result<Document, Error> {
        let url = format!("{}{}", self.configuration.merchant_url()?, path);
        self.send(self.merchant_client()?, Method::PUT, url, body)
            .await
    }

    /// `DELETE` on a merchant-scoped path.
    pub(crate) async fn delete(&self, path: &str) -> Result<Document, Error> {
        let url = format!("{}{}", self.configuration.merchant_url()?, path);
        self.send(self.merchant_client()?, Method::DELETE, url, None)
            .await
    }

    /// `POST` on a gateway-level OAuth path, authenticated with the client credentials.
    pub(crate) async fn post_oauth(&self, path: &str, body: Option<String>) -> Result<Document, Error> {
        let url = format!("{}{}", self.configuration.environment.base_url(), path);
        self.send(self.oauth_client()?, Method::POST, url, body)
            .await
    }

    /// Runs a two-step search: fetches the matching ids from `ids_path`, then the
    /// entities themselves from `page_path`, one page of ids at a time.
    pub(crate) async fn search<T: DeserializeOwned>(
        &self,
        ids_path: &str,
        criteria: Option<String>,
        page_path: &str,
        root: &str,
        item: &str,
    ) -> Result<Vec<T>, Error> {
        let results: SearchResults = self
            .post(ids_path, criteria)
            .await?
            .into_entity("search_results")?;

        let mut entities = Vec::with_capacity(results.ids.len());
        for ids in results.pages() {
            let page = self
                .post(page_path, Some(xml::to_xml("search", &IdsSearch { ids })?))
                .await?
                .into_collection(root, item)?;
            entities.extend(page);
        }

        Ok(entities)
    }

    async fn send(
        &self,
        client: &ClientWithMiddleware,
        method: Method,
        url: String,
        body: Option<String>,
    ) -> Result<Document, Error> {
        let mut request = client
            .request(method, url)
            .header(ACCEPT, XML_CONTENT_TYPE)
            .header(USER_AGENT_HEADER, USER_AGENT)
            .header(X_API_VERSION_HEADER, API_VERSION);

        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, XML_CONTENT_TYPE).body(body);
        }

        let body = request.send().await?.text().await?;
        Document::parse(&body)
    }
}

/// A decoded gateway response: the name of the root element and its content.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Document {
    pub(crate) root: String,
    pub(crate) value: Value,
}

impl Document {
    pub(crate) fn parse(body: &str) -> Result<Self, Error> {
        let (root, value) = xml::from_xml(body)?;
        Ok(Self { root, value })
    }

    pub(crate) fn is_error_response(&self) -> bool {
        self.root == API_ERROR_RESPONSE
    }

    /// Decodes either an entity rooted at `root` or an error response.
    pub(crate) fn into_result<T: DeserializeOwned>(
        self,
        root: &str,
    ) -> Result<GatewayResult<T>, Error> {
        self.into_result_with(|document| document.into_entity(root))
    }

    /// Decodes a response without a meaningful body, e.g. a deletion.
    pub(crate) fn into_unit_result(self) -> Result<GatewayResult<()>, Error> {
        self.into_result_with(|_| Ok(()))
    }

    /// Decodes an error response, or the entity with `decode` otherwise.
    pub(crate) fn into_result_with<T, F>(self, decode: F) -> Result<GatewayResult<T>, Error>
    where
        F: FnOnce(Self) -> Result<T, Error>,
    {
        if self.is_error_response() {
            return Ok(GatewayResult::Failure(Box::new(ErrorResult::from_value(
                self.value,
            )?)));
        }

        Ok(GatewayResult::Success(decode(self)?))
    }

    /// Decodes an entity rooted at `root`.
    pub(crate) fn into_entity<T: DeserializeOwned>(self, root: &str) -> Result<T, Error> {
        if self.root != root {
            return Err(Error::Decode(format!(
                "Expected a <{}> document, got <{}>",
                root, self.root
            )));
        }

        Ok(serde_json::from_value(self.value)?)
    }

    /// Decodes a collection rooted at `root` whose elements are named `item`.
    ///
    /// Typed arrays decode as-is. Untyped collections hold one or more `item` children.
    pub(crate) fn into_collection<T: DeserializeOwned>(
        self,
        root: &str,
        item: &str,
    ) -> Result<Vec<T>, Error> {
        if self.root != root {
            return Err(Error::Decode(format!(
                "Expected a <{}> document, got <{}>",
                root, self.root
            )));
        }

        let items = match self.value {
            Value::Array(items) => items,
            Value::Object(mut fields) => match fields.remove(item) {
                Some(Value::Array(items)) => items,
                Some(single) => vec![single],
                None => Vec::new(),
            },
            _ => Vec::new(),
        };

        items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(Error::from))
            .collect()
    }
}

/// Ids matching a search, returned by the `*_ids` search endpoints.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct SearchResults {
    pub(crate) page_size: Option<usize>,
    #[serde(default)]
    pub(crate) ids: Vec<String>,
}

impl SearchResults {
    /// Default page size used by the gateway when none is returned.
    const DEFAULT_PAGE_SIZE: usize = 50;

    /// Splits the ids into pages, each fetched with a separate request.
    pub(crate) fn pages(&self) -> impl Iterator<Item = &[String]> {
        self.ids
            .chunks(self.page_size.filter(|s| *s > 0).unwrap_or(Self::DEFAULT_PAGE_SIZE))
    }
}

/// Body of a request fetching one page of search results.
#[derive(Serialize, Debug)]
pub(crate) struct IdsSearch<'a> {
    pub(crate) ids: &'a [String],
}

/// Rejects blank identifiers before they reach the gateway, where they would
/// resolve to a different resource (usually a listing).
pub(crate) fn require_id(id: &str) -> Result<&str, Error> {
    if id.trim().is_empty() {
        return Err(Error::NotFound);
    }
    Ok(id)
}
