//! Events service.

use std::sync::Arc;

use serde::Serialize;

use crate::auth::AuthorizationType;
use crate::client::{ClientInner, Host};
use crate::models::{
    EmptyResponse, EventNotificationResponse, EventResponse, EventTypesResponse,
    EventsPageResponse, EventsQuery,
};
use crate::Result;

/// Service for events and their webhook notifications.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: checkout_sdk::CheckoutClient) -> checkout_sdk::Result<()> {
/// // Event types of a single version
/// let types = client.events().retrieve_all_event_types(Some("2.0")).await?;
///
/// // Re-send every notification of an event
/// client.events().retry_all_webhooks("evt_az5sblvku4ge3dwpztvyizgcau").await?;
/// # Ok(())
/// # }
/// ```
pub struct EventsService {
    inner: Arc<ClientInner>,
}

impl EventsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the event types that can be subscribed to.
    ///
    /// # Arguments
    ///
    /// * `version` - Restrict to one API version, e.g. `"2.0"`; `None` sends
    ///   no `version` parameter and returns every version
    pub async fn retrieve_all_event_types(
        &self,
        version: Option<&str>,
    ) -> Result<EventTypesResponse> {
        #[derive(Serialize)]
        struct Query<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            version: Option<&'a str>,
        }

        self.inner
            .get_with_query(
                Host::Api,
                &["event-types"],
                AuthorizationType::SecretKey,
                &Query { version },
            )
            .await
    }

    /// Get a page of events.
    pub async fn retrieve_events(&self, query: &EventsQuery) -> Result<EventsPageResponse> {
        self.inner
            .get_with_query(Host::Api, &["events"], AuthorizationType::SecretKey, query)
            .await
    }

    /// Get a single event.
    pub async fn retrieve_event(&self, event_id: &str) -> Result<EventResponse> {
        self.inner
            .get(&["events", event_id], AuthorizationType::SecretKey)
            .await
    }

    /// Get a notification of an event, with its delivery attempts.
    pub async fn retrieve_event_notification(
        &self,
        event_id: &str,
        notification_id: &str,
    ) -> Result<EventNotificationResponse> {
        self.inner
            .get(
                &["events", event_id, "notifications", notification_id],
                AuthorizationType::SecretKey,
            )
            .await
    }

    /// Re-send an event to one webhook.
    pub async fn retry_webhook(&self, event_id: &str, webhook_id: &str) -> Result<EmptyResponse> {
        self.inner
            .post_empty(
                &["events", event_id, "webhooks", webhook_id, "retry"],
                AuthorizationType::SecretKey,
            )
            .await
    }

    /// Re-send an event to every webhook.
    pub async fn retry_all_webhooks(&self, event_id: &str) -> Result<EmptyResponse> {
        self.inner
            .post_empty(
                &["events", event_id, "webhooks", "retry"],
                AuthorizationType::SecretKey,
            )
            .await
    }
}
