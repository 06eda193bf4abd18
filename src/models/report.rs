//! Report models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::common::{impl_api_response, serialize_query_date, HttpMetadata, Links};

/// Filters for [`ReportsService::get_all_reports`].
///
/// Unset fields are left out of the query string; dates are sent as
/// `YYYY-MM-DD`.
///
/// [`ReportsService::get_all_reports`]: crate::api::ReportsService::get_all_reports
///
/// # Example
///
/// ```
/// use checkout_sdk::models::ReportsQuery;
///
/// let query = ReportsQuery {
///     entity_id: Some("ent_123".into()),
///     limit: Some(10),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportsQuery {
    /// Reports created on or after this date
    #[serde(
        serialize_with = "serialize_query_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_after: Option<NaiveDate>,
    /// Reports created before this date
    #[serde(
        serialize_with = "serialize_query_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_before: Option<NaiveDate>,
    /// Restrict to one entity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
    /// Page size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Cursor returned by a previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination_token: Option<String>,
}

/// Client and entity a report belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportAccount {
    /// Client id
    #[serde(default)]
    pub client_id: Option<String>,
    /// Entity id
    #[serde(default)]
    pub entity_id: Option<String>,
}

/// A downloadable file of a report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportFile {
    /// File id
    #[serde(default)]
    pub id: String,
    /// File name
    #[serde(default)]
    pub filename: Option<String>,
    /// File format, e.g. `CSV`
    #[serde(default)]
    pub format: Option<String>,
    /// Related links, including `self` for the download
    #[serde(rename = "_links", default)]
    pub links: Links,
}

/// Details of a report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Report id
    #[serde(default)]
    pub id: String,
    /// Creation time
    #[serde(default)]
    pub created_on: Option<DateTime<Utc>>,
    /// Last modification time
    #[serde(default)]
    pub last_modified_on: Option<DateTime<Utc>>,
    /// Report type
    #[serde(rename = "type", default)]
    pub report_type: Option<String>,
    /// Description
    #[serde(default)]
    pub description: Option<String>,
    /// Owner
    #[serde(default)]
    pub account: Option<ReportAccount>,
    /// Tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Start of the reported period
    #[serde(default)]
    pub from: Option<DateTime<Utc>>,
    /// End of the reported period
    #[serde(default)]
    pub to: Option<DateTime<Utc>>,
    /// Files of the report
    #[serde(default)]
    pub files: Vec<ReportFile>,
    /// Related links
    #[serde(rename = "_links", default)]
    pub links: Links,
}

/// A single report.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportResponse {
    /// Response metadata
    #[serde(skip)]
    pub http_metadata: HttpMetadata,
    /// The report
    #[serde(flatten)]
    pub report: Report,
}

/// A page of reports.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportsResponse {
    /// Response metadata
    #[serde(skip)]
    pub http_metadata: HttpMetadata,
    /// Number of reports on this page
    #[serde(default)]
    pub count: u32,
    /// Page size used
    #[serde(default)]
    pub limit: u32,
    /// Cursor for the next page, when more results exist
    #[serde(default)]
    pub pagination_token: Option<String>,
    /// Reports on this page
    #[serde(default)]
    pub data: Vec<Report>,
    /// Related links, including `next`
    #[serde(rename = "_links", default)]
    pub links: Links,
}

impl ReportsResponse {
    /// Link to the next page, if any.
    pub fn next_link(&self) -> Option<&str> {
        self.links.get("next").map(|link| link.href.as_str())
    }
}

impl_api_response!(ReportResponse, ReportsResponse);
