//! Shapes shared by every resource: HTTP metadata, links and generic
//! responses.

use std::collections::HashMap;

use chrono::NaiveDate;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize, Serializer};

/// Date layout used by query filters.
pub const QUERY_DATE_FORMAT: &str = "%Y-%m-%d";

/// HTTP details of the response a payload was decoded from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpMetadata {
    /// Status line, e.g. `200 OK`
    pub status: String,
    /// Numeric status code
    pub status_code: u16,
    /// `Cko-Request-Id` response header
    pub request_id: Option<String>,
    /// `Cko-Version` response header
    pub version: Option<String>,
}

impl HttpMetadata {
    pub(crate) fn from_parts(status: reqwest::StatusCode, headers: &HeaderMap) -> Self {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(String::from)
        };

        Self {
            status: status.to_string(),
            status_code: status.as_u16(),
            request_id: header("cko-request-id"),
            version: header("cko-version"),
        }
    }
}

/// Response types that carry [`HttpMetadata`] next to their payload.
///
/// `Default` is the value returned for an empty (204) body.
pub trait ApiResponse: DeserializeOwned + Default {
    /// Metadata of the response this value was decoded from.
    fn http_metadata(&self) -> &HttpMetadata;

    /// Attach response metadata after decoding.
    fn set_http_metadata(&mut self, http_metadata: HttpMetadata);
}

/// Implements [`ApiResponse`] for structs with an `http_metadata` field.
macro_rules! impl_api_response {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::models::ApiResponse for $ty {
                fn http_metadata(&self) -> &$crate::models::HttpMetadata {
                    &self.http_metadata
                }

                fn set_http_metadata(&mut self, http_metadata: $crate::models::HttpMetadata) {
                    self.http_metadata = http_metadata;
                }
            }
        )+
    };
}

pub(crate) use impl_api_response;

/// A named hyperlink from a `_links` map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Target URI
    pub href: String,
    /// Optional human-readable title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// `_links` map keyed by relation name (`self`, `next`, ...).
pub type Links = HashMap<String, Link>;

/// Response with no payload, e.g. `204 No Content` from deletes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmptyResponse {
    /// Response metadata
    #[serde(skip)]
    pub http_metadata: HttpMetadata,
}

/// Response carrying only the id of a created resource.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdResponse {
    /// Response metadata
    #[serde(skip)]
    pub http_metadata: HttpMetadata,
    /// Id of the created resource
    #[serde(default)]
    pub id: String,
    /// Related links
    #[serde(rename = "_links", default)]
    pub links: Links,
}

/// Raw (non-JSON) response body, such as a report CSV.
#[derive(Debug, Clone, Default)]
pub struct ContentResponse {
    /// Response metadata
    pub http_metadata: HttpMetadata,
    /// `Content-Type` of the body, when sent
    pub content_type: Option<String>,
    /// Body bytes
    pub content: Vec<u8>,
}

impl ContentResponse {
    /// Interpret the body as UTF-8 text.
    pub fn text(&self) -> crate::Result<&str> {
        std::str::from_utf8(&self.content)
            .map_err(|e| crate::Error::InvalidInput(format!("Content is not UTF-8: {}", e)))
    }
}

impl_api_response!(EmptyResponse, IdResponse);

/// Serialize an optional date filter as `YYYY-MM-DD`.
///
/// Pair with `skip_serializing_if = "Option::is_none"`.
pub(crate) fn serialize_query_date<S>(
    date: &Option<NaiveDate>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match date {
        Some(date) => serializer.serialize_str(&date.format(QUERY_DATE_FORMAT).to_string()),
        None => serializer.serialize_none(),
    }
}
