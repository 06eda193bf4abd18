//! HTTP client and service layer for the Checkout API.
//!
//! This module provides the main entry point [`CheckoutClient`] and the
//! request dispatcher shared by every resource service.
//!
//! # Example
//!
//! ```no_run
//! use checkout_sdk::{CheckoutClient, ClientConfig, Environment};
//! use checkout_sdk::auth::Credentials;
//!
//! # async fn example() -> checkout_sdk::Result<()> {
//! let client = CheckoutClient::new(
//!     Credentials::new().with_secret_key("sk_sbox_xxx"),
//!     ClientConfig::default().with_environment(Environment::Sandbox),
//! )?;
//!
//! let webhooks = client.webhooks().retrieve_webhooks().await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;

pub use config::{default_user_agent, ClientConfig};
pub use http::{CheckoutClient, ENV_ENVIRONMENT, ENV_OAUTH_ACCESS_TOKEN, ENV_SECRET_KEY};
pub(crate) use http::{ClientInner, Host};
