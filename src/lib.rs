//! # checkout-sdk
//!
//! An async Rust client for the Checkout.com REST API.
//!
//! Each resource is exposed as a service on [`CheckoutClient`]. Every method
//! performs exactly one HTTP round trip and returns either a typed response
//! carrying its [`HttpMetadata`](models::HttpMetadata) or an [`Error`].
//!
//! ## Features
//!
//! - **Authorization**: secret keys and OAuth client credentials, selected
//!   per endpoint
//! - **Balances**: per-entity currency account balances
//! - **Events**: event types, events, notifications and webhook retries
//! - **Files**: multipart uploads and file metadata
//! - **Instruments**: stored cards and bank accounts
//! - **Reports**: report listing, details and file downloads
//! - **Webhooks**: registration and management
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use checkout_sdk::{CheckoutClient, Environment};
//! use checkout_sdk::models::WebhookRequest;
//!
//! #[tokio::main]
//! async fn main() -> checkout_sdk::Result<()> {
//!     let client = CheckoutClient::from_secret_key("sk_sbox_xxx", Environment::Sandbox)?;
//!
//!     let request = WebhookRequest::new("https://example.com/webhooks")
//!         .event_types(["payment_approved", "payment_captured"]);
//!
//!     match client.webhooks().register_webhook(&request).await {
//!         Ok(response) => println!("Registered {}", response.webhook.id),
//!         Err(err) if err.status_code() == Some(422) => {
//!             println!("Rejected: {:?}", err.details());
//!         }
//!         Err(err) => return Err(err),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error handling
//!
//! ```rust,no_run
//! use checkout_sdk::{CheckoutClient, Error};
//!
//! # async fn example(client: CheckoutClient) {
//! match client.events().retrieve_all_event_types(None).await {
//!     Ok(types) => println!("{} versions", types.event_types.len()),
//!     Err(Error::Authorization { required }) => println!("configure a {} credential", required),
//!     Err(Error::Api { http_metadata, .. }) => println!("server said {}", http_metadata.status),
//!     Err(err) => println!("request failed: {}", err),
//! }
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use error::{Error, ErrorDetails, Result};
pub use models::{Environment, EnvironmentUris, HttpMetadata};
pub use client::{CheckoutClient, ClientConfig};
pub use auth::{AuthorizationType, Credentials};

/// Prelude module for convenient imports.
///
/// ```rust
/// use checkout_sdk::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, ErrorDetails, Result};
    pub use crate::auth::{AuthorizationType, Credentials};
    pub use crate::client::{CheckoutClient, ClientConfig};
    pub use crate::models::{
        // Shared
        ApiResponse, ContentResponse, EmptyResponse, Environment, HttpMetadata, IdResponse,
        Link, Links,
        // Requests and queries
        BalancesQuery, CreateInstrumentRequest, EventsQuery, FilePurpose, FileRequest,
        ReportsQuery, UpdateInstrumentRequest, WebhookRequest,
        // Responses
        BalancesResponse, EventTypesResponse, FileResponse, InstrumentResponse,
        ReportResponse, ReportsResponse, Webhook, WebhookResponse, WebhooksResponse,
    };
}
