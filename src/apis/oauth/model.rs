use crate::configuration::Token;
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Tokens granted to an OAuth application on behalf of a merchant.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OAuthCredentials {
    pub access_token: Option<Token>,
    pub refresh_token: Option<Token>,
    pub expires_at: Option<DateTime<Utc>>,
    pub scope: Option<String>,
    pub token_type: Option<String>,
}

/// Outcome of an access token revocation.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
pub struct RevokedToken {
    #[serde(default)]
    pub success: bool,
}

#[derive(Serialize, Debug)]
pub(crate) struct TokenRequest<'a> {
    pub(crate) code: Option<&'a str>,
    pub(crate) refresh_token: Option<&'a str>,
    pub(crate) grant_type: &'a str,
    pub(crate) scope: Option<&'a str>,
}

/// Parameters of the URL a merchant follows to connect with an OAuth application.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default, Builder)]
#[builder(default, setter(into, strip_option))]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct ConnectUrlRequest {
    pub redirect_uri: Option<String>,
    /// Comma separated list of scopes, e.g. `read_write`.
    pub scope: Option<String>,
    pub state: Option<String>,
    /// `login` or `signup`.
    pub landing_page: Option<String>,
    pub login_only: Option<bool>,
    /// Prefills the merchant user.
    pub user: Option<ConnectUser>,
    /// Prefills the merchant business.
    pub business: Option<ConnectBusiness>,
    pub payment_methods: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct ConnectUser {
    pub country: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub dob_year: Option<String>,
    pub dob_month: Option<String>,
    pub dob_day: Option<String>,
    pub street_address: Option<String>,
    pub locality: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct ConnectBusiness {
    pub name: Option<String>,
    pub registered_as: Option<String>,
    pub industry: Option<String>,
    pub description: Option<String>,
    pub street_address: Option<String>,
    pub locality: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub annual_volume_amount: Option<String>,
    pub average_transaction_amount: Option<String>,
    pub maximum_transaction_amount: Option<String>,
    pub ship_physical_goods: Option<bool>,
    pub fulfillment_completed_in: Option<String>,
    pub currency: Option<String>,
    pub website: Option<String>,
}

/// [`ConnectUrlRequest`] prefixed with the client id, which always comes first in the URL.
#[derive(Serialize, Debug)]
pub(crate) struct SignedConnectUrlRequest<'a> {
    pub(crate) client_id: &'a str,
    #[serde(flatten)]
    pub(crate) request: &'a ConnectUrlRequest,
}
