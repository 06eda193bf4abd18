//! Data models for the Checkout API.
//!
//! Request types serialize only the fields that are set. Response types
//! embed [`HttpMetadata`] next to the decoded payload. Models are organized
//! by resource:
//!
//! - [`primitives`] - Environments and base URIs
//! - [`common`] - HTTP metadata, links and generic responses
//! - [`balance`] - Entity balances
//! - [`event`] - Events, event types and notifications
//! - [`file`] - File uploads
//! - [`instrument`] - Stored instruments and bank account fields
//! - [`report`] - Reports and report files
//! - [`webhook`] - Webhook registrations

pub mod primitives;
pub mod common;
pub mod balance;
pub mod event;
pub mod file;
pub mod instrument;
pub mod report;
pub mod webhook;

// Re-export commonly used types
pub use primitives::*;
pub use common::{
    ApiResponse, ContentResponse, EmptyResponse, HttpMetadata, IdResponse, Link, Links,
    QUERY_DATE_FORMAT,
};
pub use balance::*;
pub use event::*;
pub use file::*;
pub use instrument::*;
pub use report::*;
pub use webhook::*;
