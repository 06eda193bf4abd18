//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::Once;

use checkout_sdk::auth::Credentials;
use checkout_sdk::{CheckoutClient, ClientConfig, Environment};
use tracing_subscriber::EnvFilter;
use wiremock::MockServer;

pub const SECRET_KEY: &str = "sk_sbox_m73dzbpy7cf3gfd46xr4yj5xo4e";
pub const OAUTH_TOKEN: &str = "oauth_access_token_123";

static INIT: Once = Once::new();

/// Initialize logging for tests
pub fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

pub async fn setup_mock_server() -> MockServer {
    init_logging();
    MockServer::start().await
}

pub fn client_with(server: &MockServer, credentials: Credentials) -> CheckoutClient {
    CheckoutClient::new(
        credentials,
        ClientConfig::default().with_environment(Environment::custom(server.uri())),
    )
    .expect("client should build")
}

pub fn secret_key_client(server: &MockServer) -> CheckoutClient {
    client_with(server, Credentials::new().with_secret_key(SECRET_KEY))
}

pub fn oauth_client(server: &MockServer) -> CheckoutClient {
    client_with(server, Credentials::new().with_oauth_token(OAUTH_TOKEN))
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

pub async fn received_count(server: &MockServer) -> usize {
    server.received_requests().await.unwrap_or_default().len()
}

pub fn webhook_json(id: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "url": "https://example.com/webhooks",
        "active": true,
        "headers": {"authorization": "1234"},
        "content_type": "json",
        "event_types": ["payment_approved", "payment_captured"],
        "_links": {
            "self": {"href": format!("https://api.sandbox.checkout.com/webhooks/{}", id)}
        }
    })
}
