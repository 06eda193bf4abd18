//! Webhook registration example.
//!
//! Registers a webhook for payment events, prints every registered webhook
//! and then removes the one it created.
//!
//! Run with: cargo run --example register_webhook -- https://example.com/webhooks

use checkout_sdk::models::{WebhookContentType, WebhookRequest};
use checkout_sdk::{CheckoutClient, Environment, Error};

#[tokio::main]
async fn main() -> checkout_sdk::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let url = std::env::args()
        .nth(1)
        .expect("usage: register_webhook <url>");
    let secret_key = std::env::var("CHECKOUT_SECRET_KEY")
        .expect("CHECKOUT_SECRET_KEY environment variable required");

    let client = CheckoutClient::from_secret_key(secret_key, Environment::Sandbox)?;

    // Find out which event types the account can subscribe to
    let types = client.events().retrieve_all_event_types(Some("2.0")).await?;
    let available: Vec<String> = types
        .event_types
        .into_iter()
        .flat_map(|t| t.event_types)
        .filter(|t| t.starts_with("payment_"))
        .collect();
    println!("Subscribing to {} payment event type(s)", available.len());

    let request = WebhookRequest::new(url)
        .content_type(WebhookContentType::Json)
        .event_types(available);

    let registered = match client.webhooks().register_webhook(&request).await {
        Ok(response) => response.webhook,
        Err(Error::Api {
            http_metadata,
            details: Some(details),
        }) => {
            println!(
                "Rejected with {}: {}",
                http_metadata.status,
                details.error_codes.join(", ")
            );
            return Ok(());
        }
        Err(err) => return Err(err),
    };
    println!("Registered {} -> {}", registered.id, registered.url);

    let all = client.webhooks().retrieve_webhooks().await?;
    println!("\n{} webhook(s) registered:", all.webhooks.len());
    for webhook in &all.webhooks {
        println!(
            "  - {} {} ({})",
            webhook.id,
            webhook.url,
            if webhook.active { "active" } else { "inactive" }
        );
    }

    client.webhooks().remove_webhook(&registered.id).await?;
    println!("\nRemoved {}", registered.id);

    Ok(())
}
