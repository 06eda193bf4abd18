//! Reports service.

use std::sync::Arc;

use crate::auth::AuthorizationType;
use crate::client::{ClientInner, Host};
use crate::models::{ContentResponse, ReportResponse, ReportsQuery, ReportsResponse};
use crate::Result;

/// Service for report operations.
///
/// Accepts either a secret key or an OAuth token.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: checkout_sdk::CheckoutClient) -> checkout_sdk::Result<()> {
/// use checkout_sdk::models::ReportsQuery;
///
/// let reports = client.reports().get_all_reports(&ReportsQuery::default()).await?;
/// for report in &reports.data {
///     for file in &report.files {
///         let csv = client.reports().get_report_file(&report.id, &file.id).await?;
///         println!("{}", csv.text()?);
///     }
/// }
/// # Ok(())
/// # }
/// ```
pub struct ReportsService {
    inner: Arc<ClientInner>,
}

impl ReportsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List reports matching the filters.
    pub async fn get_all_reports(&self, query: &ReportsQuery) -> Result<ReportsResponse> {
        self.inner
            .get_with_query(
                Host::Api,
                &["reports"],
                AuthorizationType::SecretKeyOrOAuth,
                query,
            )
            .await
    }

    /// Get the details of a report.
    pub async fn get_report_details(&self, report_id: &str) -> Result<ReportResponse> {
        self.inner
            .get(&["reports", report_id], AuthorizationType::SecretKeyOrOAuth)
            .await
    }

    /// Download a report file. The body is returned as raw bytes.
    pub async fn get_report_file(&self, report_id: &str, file_id: &str) -> Result<ContentResponse> {
        self.inner
            .get_content(
                &["reports", report_id, "files", file_id],
                AuthorizationType::SecretKeyOrOAuth,
            )
            .await
    }
}
