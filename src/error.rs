//! Error types for the Checkout API client.
//!
//! Every operation in this crate returns [`Result`]. The variants separate
//! failures that never reached the server (missing credentials, transport
//! errors) from responses the server rejected and from payloads that could
//! not be decoded.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::auth::AuthorizationType;
use crate::models::HttpMetadata;

/// A specialized `Result` type for Checkout operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all Checkout API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// No configured credential satisfies the authorization the endpoint
    /// requires. Raised before any request is sent.
    #[error("Authorization error: {required} credential is not configured")]
    Authorization {
        /// Scheme the endpoint asked for
        required: AuthorizationType,
    },

    /// OAuth token exchange was rejected
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// HTTP request failed (DNS, connect, TLS, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a status code of 400 or above
    #[error("API error: {}", http_metadata.status)]
    Api {
        /// Status line, code and tracing headers of the failed response
        http_metadata: HttpMetadata,
        /// Validation detail, decoded for 422 responses only
        details: Option<ErrorDetails>,
    },

    /// Response body did not match the expected JSON shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading a local file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Field-level validation detail returned with `422 Unprocessable Entity`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Request identifier, useful when contacting support
    #[serde(default)]
    pub request_id: Option<String>,
    /// Error category, e.g. `request_invalid`
    #[serde(default)]
    pub error_type: Option<String>,
    /// Codes naming each failed validation, e.g. `url_required`
    #[serde(default)]
    pub error_codes: Vec<String>,
}

impl Error {
    /// Returns `true` if the request was answered by the server.
    ///
    /// `false` means the call failed locally (credentials, configuration,
    /// I/O) or on the network before a status code was received.
    pub fn reached_server(&self) -> bool {
        matches!(self, Error::Api { .. } | Error::Json(_) | Error::Authentication(_))
    }

    /// Returns `true` if this is an authorization or authentication error.
    pub fn is_auth_error(&self) -> bool {
        match self {
            Error::Authorization { .. } | Error::Authentication(_) => true,
            Error::Api { http_metadata, .. } => {
                matches!(http_metadata.status_code, 401 | 403)
            }
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a client-side issue.
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { http_metadata, .. } => (400..500).contains(&http_metadata.status_code),
            Error::InvalidInput(_) | Error::Config(_) | Error::Authorization { .. } => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { http_metadata, .. } => http_metadata.status_code >= 500,
            _ => false,
        }
    }

    /// HTTP status code of an API error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Api { http_metadata, .. } => Some(http_metadata.status_code),
            _ => None,
        }
    }

    /// Validation detail of a 422 API error.
    pub fn details(&self) -> Option<&ErrorDetails> {
        match self {
            Error::Api { details, .. } => details.as_ref(),
            _ => None,
        }
    }

    /// Create an API error from response metadata and the raw body.
    ///
    /// Only 422 bodies are decoded; any other body is discarded.
    pub(crate) fn from_api_response(http_metadata: HttpMetadata, body: &[u8]) -> Self {
        let details = if http_metadata.status_code == 422 {
            serde_json::from_slice::<ErrorDetails>(body).ok()
        } else {
            None
        };

        Error::Api {
            http_metadata,
            details,
        }
    }
}
