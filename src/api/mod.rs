//! API service modules for Checkout endpoints.
//!
//! Each service is a stateless view over the shared client and maps one
//! method to one REST operation.

mod balances;
mod events;
mod files;
mod instruments;
mod reports;
mod webhooks;

pub use balances::BalancesService;
pub use events::EventsService;
pub use files::FilesService;
pub use instruments::InstrumentsService;
pub use reports::ReportsService;
pub use webhooks::WebhooksService;
