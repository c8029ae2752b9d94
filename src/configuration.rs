//! Credentials and the resolved configuration shared by all the gateway clients.

use crate::{client::Environment, Error};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

/// Credentials used to authenticate against the gateway.
#[derive(Debug, Clone)]
pub enum Credentials {
    /// Merchant API keys, sent with HTTP Basic authentication.
    Keys {
        merchant_id: String,
        public_key: String,
        private_key: Token,
    },
    /// OAuth access token obtained on behalf of a merchant.
    ///
    /// The environment and merchant id are encoded in the token itself.
    AccessToken { access_token: Token },
    /// OAuth application credentials. These only grant access to the OAuth endpoints.
    ClientCredentials {
        client_id: String,
        client_secret: Token,
    },
}

/// Wrapper for a secret string that makes it harder to accidentally expose secrets
/// and ensures the backing memory is wiped on drop.
///
/// ```rust
/// # use braintree_rust::configuration::Token;
/// let token = Token::new("supersecret");
///
/// // The secret is redacted when printed with Debug
/// assert!(!format!("{:?}", token).contains("supersecret"));
///
/// // But can be manually exposed calling `expose_secret()`
/// assert_eq!(token.expose_secret(), "supersecret");
/// ```
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Token(#[serde(serialize_with = "serialize_secret")] Secret<String>);

impl Token {
    /// Wraps a secret string in a new `Token`.
    pub fn new<T: Into<String>>(s: T) -> Self {
        Self(Secret::new(s.into()))
    }

    /// Exposes a reference to the underlying secret string.
    pub fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }
}

impl<T> From<T> for Token
where
    T: Into<String>,
{
    fn from(s: T) -> Self {
        Token::new(s)
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.expose_secret() == other.expose_secret()
    }
}

fn serialize_secret<S>(secret: &Secret<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::ser::Serializer,
{
    secret.expose_secret().serialize(serializer)
}

/// Configuration resolved from the [`Credentials`] given to the client builder.
#[derive(Debug, Clone)]
pub struct Configuration {
    pub(crate) environment: Environment,
    pub(crate) merchant_id: Option<String>,
    pub(crate) public_key: Option<String>,
    pub(crate) private_key: Option<Token>,
    pub(crate) access_token: Option<Token>,
    pub(crate) client_id: Option<String>,
    pub(crate) client_secret: Option<Token>,
}

impl Configuration {
    pub(crate) fn new(credentials: Credentials, environment: Environment) -> Result<Self, Error> {
        let mut configuration = Self {
            environment,
            merchant_id: None,
            public_key: None,
            private_key: None,
            access_token: None,
            client_id: None,
            client_secret: None,
        };

        match credentials {
            Credentials::Keys {
                merchant_id,
                public_key,
                private_key,
            } => {
                configuration.merchant_id = Some(merchant_id);
                configuration.public_key = Some(public_key);
                configuration.private_key = Some(private_key);
            }
            Credentials::AccessToken { access_token } => {
                let parsed = ParsedAccessToken::parse(access_token.expose_secret())?;
                configuration.environment = parsed.environment;
                configuration.merchant_id = Some(parsed.merchant_id);
                configuration.access_token = Some(access_token);
            }
            Credentials::ClientCredentials {
                client_id,
                client_secret,
            } => configuration.set_client_credentials(client_id, client_secret)?,
        }

        Ok(configuration)
    }

    pub(crate) fn set_client_credentials(
        &mut self,
        client_id: String,
        client_secret: Token,
    ) -> Result<(), Error> {
        if !client_id.starts_with("client_id$") {
            return Err(Error::Configuration(
                "Value passed for client_id is not a client_id".to_string(),
            ));
        }
        if !client_secret.expose_secret().starts_with("client_secret$") {
            return Err(Error::Configuration(
                "Value passed for client_secret is not a client_secret".to_string(),
            ));
        }

        let id_environment = credential_environment(&client_id)?;
        let secret_environment = credential_environment(client_secret.expose_secret())?;
        if id_environment != secret_environment {
            return Err(Error::Configuration(format!(
                "Mismatched credential environments: client_id environment is {:?} and client_secret environment is {:?}",
                id_environment, secret_environment
            )));
        }
        // A custom URL can front any environment
        if !matches!(self.environment, Environment::Custom(_)) && id_environment != self.environment {
            return Err(Error::Configuration(format!(
                "Mismatched credential environments: credentials are for {:?} but the client targets {:?}",
                id_environment, self.environment
            )));
        }

        self.client_id = Some(client_id);
        self.client_secret = Some(client_secret);
        Ok(())
    }

    /// The environment the client is connected to.
    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn merchant_id(&self) -> Result<&str, Error> {
        self.merchant_id.as_deref().ok_or_else(|| {
            Error::Configuration("Missing merchant_id when constructing BraintreeGateway".into())
        })
    }

    pub fn public_key(&self) -> Result<&str, Error> {
        self.public_key.as_deref().ok_or_else(|| {
            Error::Configuration("Missing public_key when constructing BraintreeGateway".into())
        })
    }

    pub(crate) fn private_key(&self) -> Result<&Token, Error> {
        self.private_key.as_ref().ok_or_else(|| {
            Error::Configuration("Missing private_key when constructing BraintreeGateway".into())
        })
    }

    pub fn client_id(&self) -> Result<&str, Error> {
        self.client_id.as_deref().ok_or_else(|| {
            Error::Configuration("Missing client_id when constructing BraintreeGateway".into())
        })
    }

    pub(crate) fn client_secret(&self) -> Result<&Token, Error> {
        self.client_secret.as_ref().ok_or_else(|| {
            Error::Configuration("Missing client_secret when constructing BraintreeGateway".into())
        })
    }

    /// Base URL of the merchant-scoped API, e.g. `https://api.braintreegateway.com/merchants/xyz`.
    pub fn merchant_url(&self) -> Result<String, Error> {
        Ok(format!(
            "{}/merchants/{}",
            self.environment.base_url(),
            urlencoding::encode(self.merchant_id()?)
        ))
    }
}

/// Client credentials look like `client_id$<environment>$<id>`, the environment being the
/// second segment.
fn credential_environment(credential: &str) -> Result<Environment, Error> {
    let environment = credential.split('$').nth(1).ok_or_else(|| {
        Error::Configuration("Client credentials do not name an environment".into())
    })?;
    Environment::parse(environment)
}

/// Access tokens look like `access_token$<environment>$<merchant_id>$<secret>`.
struct ParsedAccessToken {
    environment: Environment,
    merchant_id: String,
}

impl ParsedAccessToken {
    fn parse(access_token: &str) -> Result<Self, Error> {
        let invalid =
            || Error::Configuration("Value passed for access_token is not an access_token".into());

        let mut parts = access_token.split('$');
        if parts.next() != Some("access_token") {
            return Err(invalid());
        }
        let environment = parts.next().ok_or_else(invalid)?;
        let merchant_id = parts.next().filter(|m| !m.is_empty()).ok_or_else(invalid)?;

        Ok(Self {
            environment: Environment::parse(environment)?,
            merchant_id: merchant_id.to_string(),
        })
    }
}
