//! Webhook models.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::common::{impl_api_response, HttpMetadata, Links};

/// Body encoding of webhook notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WebhookContentType {
    /// JSON body
    Json,
    /// XML body
    Xml,
}

/// Body for registering or updating a webhook.
///
/// Absent fields are not sent, which matters for partial updates: an
/// unset `headers` keeps the stored headers while `Some(HashMap::new())`
/// clears them.
///
/// # Example
///
/// ```
/// use checkout_sdk::models::WebhookRequest;
///
/// let request = WebhookRequest::new("https://example.com/webhooks")
///     .event_types(["payment_approved", "payment_captured"])
///     .header("authorization", "1234");
/// assert_eq!(request.event_types.as_ref().map(Vec::len), Some(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WebhookRequest {
    /// Receiver URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Whether notifications are sent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// Headers sent with each notification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
    /// Body encoding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<WebhookContentType>,
    /// Event types to notify
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_types: Option<Vec<String>>,
}

impl WebhookRequest {
    /// Create a request for a receiver URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    /// Enable or disable the webhook.
    pub fn active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    /// Add a header sent with each notification.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Set the body encoding.
    pub fn content_type(mut self, content_type: WebhookContentType) -> Self {
        self.content_type = Some(content_type);
        self
    }

    /// Set the event types to notify.
    pub fn event_types<I, S>(mut self, event_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.event_types = Some(event_types.into_iter().map(Into::into).collect());
        self
    }
}

/// A registered webhook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webhook {
    /// Webhook id
    #[serde(default)]
    pub id: String,
    /// Receiver URL
    #[serde(default)]
    pub url: String,
    /// Whether notifications are sent
    #[serde(default)]
    pub active: bool,
    /// Headers sent with each notification
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// Body encoding
    #[serde(default)]
    pub content_type: Option<WebhookContentType>,
    /// Event types notified
    #[serde(default)]
    pub event_types: Vec<String>,
    /// Related links
    #[serde(rename = "_links", default)]
    pub links: Links,
}

/// A single webhook.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookResponse {
    /// Response metadata
    #[serde(skip)]
    pub http_metadata: HttpMetadata,
    /// The webhook
    #[serde(flatten)]
    pub webhook: Webhook,
}

/// All registered webhooks. Empty when the server answers 204.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct WebhooksResponse {
    /// Response metadata
    #[serde(skip)]
    pub http_metadata: HttpMetadata,
    /// Registered webhooks
    pub webhooks: Vec<Webhook>,
}

impl_api_response!(WebhookResponse, WebhooksResponse);
