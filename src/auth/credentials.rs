//! API credentials and authorization selection.

use std::fmt;

use reqwest::header::HeaderValue;
use secrecy::{ExposeSecret, SecretString};

use crate::{Error, Result};

/// Authorization scheme an endpoint accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthorizationType {
    /// Secret API key only
    SecretKey,
    /// OAuth access token only
    OAuth,
    /// Either credential; the secret key is used when both are configured
    SecretKeyOrOAuth,
}

impl fmt::Display for AuthorizationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthorizationType::SecretKey => write!(f, "secret key"),
            AuthorizationType::OAuth => write!(f, "OAuth"),
            AuthorizationType::SecretKeyOrOAuth => write!(f, "secret key or OAuth"),
        }
    }
}

/// A resolved credential, ready to be sent in the `Authorization` header.
#[derive(Clone)]
pub enum SdkAuthorization {
    /// Secret API key
    SecretKey(SecretString),
    /// OAuth bearer token
    OAuth(SecretString),
}

impl SdkAuthorization {
    /// The scheme this authorization was resolved to.
    pub fn authorization_type(&self) -> AuthorizationType {
        match self {
            SdkAuthorization::SecretKey(_) => AuthorizationType::SecretKey,
            SdkAuthorization::OAuth(_) => AuthorizationType::OAuth,
        }
    }

    /// Build the `Authorization` header value.
    pub(crate) fn header_value(&self) -> Result<HeaderValue> {
        let token = match self {
            SdkAuthorization::SecretKey(key) => key,
            SdkAuthorization::OAuth(token) => token,
        };

        let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
            .map_err(|_| Error::Config("Credential contains invalid header characters".into()))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Debug for SdkAuthorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SdkAuthorization")
            .field(&self.authorization_type())
            .field(&"[REDACTED]")
            .finish()
    }
}

/// Credentials configured for a client.
///
/// Either credential may be absent. Endpoints declare the
/// [`AuthorizationType`] they need and [`Credentials::authorization_for`]
/// picks the matching one.
///
/// # Example
///
/// ```
/// use checkout_sdk::auth::{AuthorizationType, Credentials};
///
/// let credentials = Credentials::new().with_secret_key("sk_sbox_xxx");
/// assert!(credentials.authorization_for(AuthorizationType::SecretKey).is_ok());
/// assert!(credentials.authorization_for(AuthorizationType::OAuth).is_err());
/// ```
#[derive(Clone, Default)]
pub struct Credentials {
    secret_key: Option<SecretString>,
    oauth_token: Option<SecretString>,
}

impl Credentials {
    /// Create an empty credential set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the secret API key.
    pub fn with_secret_key(mut self, secret_key: impl Into<String>) -> Self {
        self.secret_key = Some(SecretString::from(secret_key.into()));
        self
    }

    /// Set the OAuth access token.
    pub fn with_oauth_token(mut self, access_token: impl Into<String>) -> Self {
        self.oauth_token = Some(SecretString::from(access_token.into()));
        self
    }

    /// Returns `true` if a secret key is configured.
    pub fn has_secret_key(&self) -> bool {
        self.secret_key.is_some()
    }

    /// Returns `true` if an OAuth token is configured.
    pub fn has_oauth_token(&self) -> bool {
        self.oauth_token.is_some()
    }

    /// Returns `true` if no credential is configured.
    pub fn is_empty(&self) -> bool {
        self.secret_key.is_none() && self.oauth_token.is_none()
    }

    /// Resolve the authorization for an endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Authorization`] when no configured credential
    /// satisfies `required`.
    pub fn authorization_for(&self, required: AuthorizationType) -> Result<SdkAuthorization> {
        let secret_key = self.secret_key.clone().map(SdkAuthorization::SecretKey);
        let oauth = self.oauth_token.clone().map(SdkAuthorization::OAuth);

        let resolved = match required {
            AuthorizationType::SecretKey => secret_key,
            AuthorizationType::OAuth => oauth,
            AuthorizationType::SecretKeyOrOAuth => secret_key.or(oauth),
        };

        resolved.ok_or(Error::Authorization { required })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |s: &Option<SecretString>| s.as_ref().map(|_| "[REDACTED]");
        f.debug_struct("Credentials")
            .field("secret_key", &redact(&self.secret_key))
            .field("oauth_token", &redact(&self.oauth_token))
            .finish()
    }
}
