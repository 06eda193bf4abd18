//! Credentials and authorization selection for the Checkout API.
//!
//! The platform accepts two schemes:
//!
//! 1. **Secret key** - a long-lived API key issued in the dashboard
//! 2. **OAuth** - a short-lived access token obtained with client credentials
//!
//! Each endpoint declares which scheme(s) it accepts as an
//! [`AuthorizationType`]; [`Credentials::authorization_for`] resolves the
//! credential to send, or fails before any request leaves the process.
//!
//! # Secret key
//!
//! ```no_run
//! use checkout_sdk::{CheckoutClient, Environment};
//!
//! # fn example() -> checkout_sdk::Result<()> {
//! let client = CheckoutClient::from_secret_key("sk_sbox_xxx", Environment::Sandbox)?;
//! # Ok(())
//! # }
//! ```
//!
//! # OAuth
//!
//! ```no_run
//! use checkout_sdk::{CheckoutClient, Environment};
//! use checkout_sdk::auth::scopes;
//!
//! # async fn example() -> checkout_sdk::Result<()> {
//! let client = CheckoutClient::from_oauth(
//!     "ack_client_id",
//!     "client-secret",
//!     &[scopes::BALANCES_VIEW, scopes::REPORTS_VIEW],
//!     Environment::Sandbox,
//! ).await?;
//! # Ok(())
//! # }
//! ```

mod credentials;
mod oauth;

pub use credentials::{AuthorizationType, Credentials, SdkAuthorization};
pub use oauth::{scopes, OAuthToken};
pub(crate) use oauth::request_token;
