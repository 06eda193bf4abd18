//! Webhooks service.

use std::sync::Arc;

use crate::auth::AuthorizationType;
use crate::client::ClientInner;
use crate::models::{EmptyResponse, WebhookRequest, WebhookResponse, WebhooksResponse};
use crate::Result;

/// Service for webhook registrations.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: checkout_sdk::CheckoutClient) -> checkout_sdk::Result<()> {
/// use checkout_sdk::models::WebhookRequest;
///
/// let request = WebhookRequest::new("https://example.com/webhooks")
///     .event_types(["payment_approved"]);
/// let registered = client.webhooks().register_webhook(&request).await?;
///
/// // Pause notifications without touching anything else
/// client
///     .webhooks()
///     .partially_update_webhook(&registered.webhook.id, &WebhookRequest::default().active(false))
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct WebhooksService {
    inner: Arc<ClientInner>,
}

impl WebhooksService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get every registered webhook.
    pub async fn retrieve_webhooks(&self) -> Result<WebhooksResponse> {
        self.inner
            .get(&["webhooks"], AuthorizationType::SecretKey)
            .await
    }

    /// Register a new webhook.
    pub async fn register_webhook(&self, request: &WebhookRequest) -> Result<WebhookResponse> {
        self.inner
            .post(&["webhooks"], AuthorizationType::SecretKey, request)
            .await
    }

    /// Get a webhook.
    pub async fn retrieve_webhook(&self, webhook_id: &str) -> Result<WebhookResponse> {
        self.inner
            .get(&["webhooks", webhook_id], AuthorizationType::SecretKey)
            .await
    }

    /// Replace a webhook's configuration.
    pub async fn update_webhook(
        &self,
        webhook_id: &str,
        request: &WebhookRequest,
    ) -> Result<WebhookResponse> {
        self.inner
            .put(&["webhooks", webhook_id], AuthorizationType::SecretKey, request)
            .await
    }

    /// Change only the fields set in `request`.
    pub async fn partially_update_webhook(
        &self,
        webhook_id: &str,
        request: &WebhookRequest,
    ) -> Result<WebhookResponse> {
        self.inner
            .patch(&["webhooks", webhook_id], AuthorizationType::SecretKey, request)
            .await
    }

    /// Remove a webhook.
    pub async fn remove_webhook(&self, webhook_id: &str) -> Result<EmptyResponse> {
        self.inner
            .delete(&["webhooks", webhook_id], AuthorizationType::SecretKey)
            .await
    }
}
