//! Event, event type and notification models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{impl_api_response, HttpMetadata, Links};

/// Event types published under one API version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventTypes {
    /// API version, e.g. `2.0`
    #[serde(default)]
    pub version: String,
    /// Event type names, e.g. `payment_approved`
    #[serde(default)]
    pub event_types: Vec<String>,
}

/// All event types, grouped by version.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct EventTypesResponse {
    /// Response metadata
    #[serde(skip)]
    pub http_metadata: HttpMetadata,
    /// One entry per version
    pub event_types: Vec<EventTypes>,
}

/// Filters for [`EventsService::retrieve_events`].
///
/// [`EventsService::retrieve_events`]: crate::api::EventsService::retrieve_events
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EventsQuery {
    /// Number of events to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Number of events to skip
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    /// Events created at or after this instant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<DateTime<Utc>>,
    /// Events created before this instant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<DateTime<Utc>>,
    /// Restrict to events of one payment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    /// Restrict to events of one charge
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charge_id: Option<String>,
    /// Restrict to events of one track id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_id: Option<String>,
    /// Restrict to events carrying a merchant reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

/// Summary of an event, as listed by [`EventsPageResponse`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSummary {
    /// Event id
    #[serde(default)]
    pub id: String,
    /// Event type
    #[serde(rename = "type", default)]
    pub event_type: String,
    /// Creation time
    #[serde(default)]
    pub created_on: Option<DateTime<Utc>>,
    /// Related links
    #[serde(rename = "_links", default)]
    pub links: Links,
}

/// A page of events.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventsPageResponse {
    /// Response metadata
    #[serde(skip)]
    pub http_metadata: HttpMetadata,
    /// Total number of matching events
    #[serde(default)]
    pub total_count: u32,
    /// Page size used
    #[serde(default)]
    pub limit: u32,
    /// Offset used
    #[serde(default)]
    pub skip: u32,
    /// Start of the queried window
    #[serde(default)]
    pub from: Option<DateTime<Utc>>,
    /// End of the queried window
    #[serde(default)]
    pub to: Option<DateTime<Utc>>,
    /// Events on this page
    #[serde(default)]
    pub data: Vec<EventSummary>,
}

/// Delivery summary of a notification attached to an event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventNotificationSummary {
    /// Notification id
    #[serde(default)]
    pub id: String,
    /// Delivery target
    #[serde(default)]
    pub url: String,
    /// Whether the last attempt succeeded
    #[serde(default)]
    pub success: bool,
    /// Related links
    #[serde(rename = "_links", default)]
    pub links: Links,
}

/// A single event with its payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventResponse {
    /// Response metadata
    #[serde(skip)]
    pub http_metadata: HttpMetadata,
    /// Event id
    #[serde(default)]
    pub id: String,
    /// Event type
    #[serde(rename = "type", default)]
    pub event_type: String,
    /// API version of the payload
    #[serde(default)]
    pub version: Option<String>,
    /// Creation time
    #[serde(default)]
    pub created_on: Option<DateTime<Utc>>,
    /// Event payload; its shape depends on the event type
    #[serde(default)]
    pub data: serde_json::Value,
    /// Notifications sent for this event
    #[serde(default)]
    pub notifications: Vec<EventNotificationSummary>,
    /// Related links
    #[serde(rename = "_links", default)]
    pub links: Links,
}

/// One delivery attempt of a notification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationAttempt {
    /// Status code returned by the receiver
    #[serde(default)]
    pub status_code: u16,
    /// Body returned by the receiver
    #[serde(default)]
    pub response_body: Option<String>,
    /// `automatic` or `manual`
    #[serde(default)]
    pub retry_mode: Option<String>,
    /// When the attempt was made
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

/// A notification with its delivery attempts.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventNotificationResponse {
    /// Response metadata
    #[serde(skip)]
    pub http_metadata: HttpMetadata,
    /// Notification id
    #[serde(default)]
    pub id: String,
    /// Delivery target
    #[serde(default)]
    pub url: String,
    /// Whether the last attempt succeeded
    #[serde(default)]
    pub success: bool,
    /// Content type sent to the receiver
    #[serde(default)]
    pub content_type: Option<String>,
    /// Delivery attempts, oldest first
    #[serde(default)]
    pub attempts: Vec<NotificationAttempt>,
    /// Related links
    #[serde(rename = "_links", default)]
    pub links: Links,
}

impl_api_response!(
    EventTypesResponse,
    EventsPageResponse,
    EventResponse,
    EventNotificationResponse,
);
