use crate::{
    apis::{
        oauth::{
            ConnectUrlRequest, OAuthCredentials, RevokedToken, SignedConnectUrlRequest,
            TokenRequest,
        },
        BraintreeClientInner,
    },
    digest::{self, Algorithm},
    query_string::to_query_string,
    result::GatewayResult,
    xml, Error,
};
use std::sync::Arc;

/// OAuth APIs client.
///
/// Requires the client to be built with application credentials, see
/// [`with_client_credentials`](crate::client::BraintreeClientBuilder::with_client_credentials).
#[derive(Clone, Debug)]
pub struct OAuthApi {
    inner: Arc<BraintreeClientInner>,
}

impl OAuthApi {
    pub(crate) fn new(inner: Arc<BraintreeClientInner>) -> Self {
        Self { inner }
    }

    /// Exchanges the authorization code received on the redirect URI for an access token.
    #[tracing::instrument(name = "Create OAuth token from code", skip(self, code))]
    pub async fn create_token_from_code(
        &self,
        code: &str,
        scope: Option<&str>,
    ) -> Result<GatewayResult<OAuthCredentials>, Error> {
        self.create_token(&TokenRequest {
            code: Some(code),
            refresh_token: None,
            grant_type: "authorization_code",
            scope,
        })
        .await
    }

    /// Same as [`create_token_from_code`](Self::create_token_from_code), failing with
    /// [`Error::ValidationsFailed`](crate::Error::ValidationsFailed) on validation errors.
    pub async fn create_token_from_code_strict(
        &self,
        code: &str,
        scope: Option<&str>,
    ) -> Result<OAuthCredentials, Error> {
        self.create_token_from_code(code, scope).await?.into_result()
    }

    /// Obtains a new access token from a refresh token.
    #[tracing::instrument(name = "Create OAuth token from refresh token", skip_all)]
    pub async fn create_token_from_refresh_token(
        &self,
        refresh_token: &str,
        scope: Option<&str>,
    ) -> Result<GatewayResult<OAuthCredentials>, Error> {
        self.create_token(&TokenRequest {
            code: None,
            refresh_token: Some(refresh_token),
            grant_type: "refresh_token",
            scope,
        })
        .await
    }

    pub async fn create_token_from_refresh_token_strict(
        &self,
        refresh_token: &str,
        scope: Option<&str>,
    ) -> Result<OAuthCredentials, Error> {
        self.create_token_from_refresh_token(refresh_token, scope)
            .await?
            .into_result()
    }

    async fn create_token(
        &self,
        request: &TokenRequest<'_>,
    ) -> Result<GatewayResult<OAuthCredentials>, Error> {
        self.inner
            .post_oauth(
                "/oauth/access_tokens",
                Some(xml::to_xml("credentials", request)?),
            )
            .await?
            .into_result("credentials")
    }

    #[tracing::instrument(name = "Revoke OAuth access token", skip_all)]
    pub async fn revoke_access_token(
        &self,
        access_token: &str,
    ) -> Result<GatewayResult<RevokedToken>, Error> {
        self.inner
            .post_oauth(
                "/oauth/revoke_access_token",
                Some(xml::to_xml("token", access_token)?),
            )
            .await?
            .into_result("result")
    }

    pub async fn revoke_access_token_strict(&self, access_token: &str) -> Result<RevokedToken, Error> {
        self.revoke_access_token(access_token).await?.into_result()
    }

    /// Builds the signed URL a merchant follows to connect with the application.
    ///
    /// No request is made to the gateway.
    pub fn connect_url(&self, request: &ConnectUrlRequest) -> Result<String, Error> {
        let configuration = &self.inner.configuration;
        let query = to_query_string(&SignedConnectUrlRequest {
            client_id: configuration.client_id()?,
            request,
        })?;

        let url = format!(
            "{}/oauth/connect?{}",
            configuration.environment().base_url(),
            query
        );
        let signature = self.compute_signature(&url)?;

        Ok(format!(
            "{}&signature={}&algorithm={}",
            url,
            signature,
            Algorithm::Sha256.as_str()
        ))
    }

    /// Signature of an unsigned connect URL, keyed by the client secret.
    pub fn compute_signature(&self, url: &str) -> Result<String, Error> {
        digest::hexdigest(
            Algorithm::Sha256,
            self.inner.configuration.client_secret()?.expose_secret(),
            url,
        )
    }
}
