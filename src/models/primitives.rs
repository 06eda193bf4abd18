//! Environment selection and base URIs.

use std::fmt;
use std::str::FromStr;

/// Base URIs for a custom deployment, e.g. a mock server in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentUris {
    /// REST API base URI
    pub base_uri: String,
    /// Balances API base URI
    pub balances_uri: String,
    /// OAuth token endpoint
    pub authorization_uri: String,
}

/// Environment configuration for the Checkout API.
///
/// # Example
///
/// ```
/// use checkout_sdk::Environment;
///
/// let env = Environment::Sandbox;
/// assert_eq!(env.base_uri(), "https://api.sandbox.checkout.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Environment {
    /// Sandbox environment, test cards and no real money movement.
    #[default]
    Sandbox,
    /// Production environment.
    Production,
    /// Caller-provided URIs.
    Custom(EnvironmentUris),
}

impl Environment {
    /// Point every API at a single base URI.
    ///
    /// The OAuth token endpoint becomes `{uri}/connect/token`.
    pub fn custom(uri: impl Into<String>) -> Self {
        let uri = uri.into().trim_end_matches('/').to_string();
        Environment::Custom(EnvironmentUris {
            authorization_uri: format!("{}/connect/token", uri),
            balances_uri: uri.clone(),
            base_uri: uri,
        })
    }

    /// Get the base URI for REST API requests.
    pub fn base_uri(&self) -> &str {
        match self {
            Environment::Sandbox => "https://api.sandbox.checkout.com",
            Environment::Production => "https://api.checkout.com",
            Environment::Custom(uris) => &uris.base_uri,
        }
    }

    /// Get the base URI for the balances API.
    pub fn balances_uri(&self) -> &str {
        match self {
            Environment::Sandbox => "https://balances.sandbox.checkout.com",
            Environment::Production => "https://balances.checkout.com",
            Environment::Custom(uris) => &uris.balances_uri,
        }
    }

    /// Get the OAuth token endpoint.
    pub fn authorization_uri(&self) -> &str {
        match self {
            Environment::Sandbox => "https://access.sandbox.checkout.com/connect/token",
            Environment::Production => "https://access.checkout.com/connect/token",
            Environment::Custom(uris) => &uris.authorization_uri,
        }
    }

    /// Returns `true` if this is the production environment.
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    /// Returns `true` if this is the sandbox environment.
    pub fn is_sandbox(&self) -> bool {
        matches!(self, Environment::Sandbox)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Sandbox => write!(f, "sandbox"),
            Environment::Production => write!(f, "production"),
            Environment::Custom(uris) => write!(f, "custom({})", uris.base_uri),
        }
    }
}

impl FromStr for Environment {
    type Err = crate::Error;

    /// Parses `sandbox`, `production` (or `prod`/`live`), or an
    /// `http(s)://` URI for a custom environment.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sandbox" | "sbox" | "" => Ok(Environment::Sandbox),
            "production" | "prod" | "live" => Ok(Environment::Production),
            other if other.starts_with("http://") || other.starts_with("https://") => {
                url::Url::parse(s.trim())
                    .map_err(|e| crate::Error::Config(format!("Invalid environment URI: {}", e)))?;
                Ok(Environment::custom(s.trim()))
            }
            other => Err(crate::Error::Config(format!(
                "Unknown environment: {}",
                other
            ))),
        }
    }
}
