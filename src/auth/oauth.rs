//! OAuth client-credentials token exchange.

use chrono::{DateTime, Duration, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::{Error, Result};

/// Scopes commonly requested for the endpoints covered by this crate.
pub mod scopes {
    /// Read entity balances
    pub const BALANCES_VIEW: &str = "balances:view";
    /// Upload and retrieve files
    pub const FILES: &str = "files";
    /// Manage stored instruments
    pub const VAULT_INSTRUMENTS: &str = "vault:instruments";
    /// Bank account field formatting
    pub const PAYOUTS_BANK_DETAILS: &str = "payouts:bank-details";
    /// Read reports
    pub const REPORTS_VIEW: &str = "reports:view";
}

/// An access token issued by the authorization server.
#[derive(Clone)]
pub struct OAuthToken {
    access_token: SecretString,
    token_type: Option<String>,
    expires_at: DateTime<Utc>,
}

impl OAuthToken {
    /// When the token stops being accepted.
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Token type reported by the authorization server, usually `Bearer`.
    pub fn token_type(&self) -> Option<&str> {
        self.token_type.as_deref()
    }

    /// Check if the token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    pub(crate) fn access_token(&self) -> &SecretString {
        &self.access_token
    }
}

impl std::fmt::Debug for OAuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthToken")
            .field("access_token", &"[REDACTED]")
            .field("token_type", &self.token_type)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    token_type: Option<String>,
    expires_in: i64,
}

/// Exchange client credentials for an access token.
///
/// # Errors
///
/// Returns [`Error::Authentication`] when the authorization server rejects
/// the credentials or returns an unusable `expires_in`, and [`Error::Http`]
/// when it cannot be reached.
pub(crate) async fn request_token(
    http: &reqwest::Client,
    authorization_uri: &str,
    client_id: &str,
    client_secret: &SecretString,
    scopes: &[&str],
) -> Result<OAuthToken> {
    let scope = scopes.join(" ");
    let form = [
        ("grant_type", "client_credentials"),
        ("client_id", client_id),
        ("client_secret", client_secret.expose_secret()),
        ("scope", scope.as_str()),
    ];

    tracing::debug!(authorization_uri, client_id, "requesting OAuth access token");

    let response = http.post(authorization_uri).form(&form).send().await?;

    if !response.status().is_success() {
        let status = response.status();
        let body: serde_json::Value = response.json().await.unwrap_or_default();
        return Err(Error::Authentication(format!(
            "Token exchange failed ({}): {}",
            status, body
        )));
    }

    let body = response.bytes().await?;
    let token: TokenResponse = serde_json::from_slice(&body)?;

    let expires_at = Duration::try_seconds(token.expires_in)
        .and_then(|lifetime| Utc::now().checked_add_signed(lifetime))
        .ok_or_else(|| {
            Error::Authentication(format!("Invalid expires_in: {}", token.expires_in))
        })?;

    Ok(OAuthToken {
        access_token: SecretString::from(token.access_token),
        token_type: token.token_type,
        expires_at,
    })
}
