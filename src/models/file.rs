//! File upload models.

use std::fmt;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{impl_api_response, HttpMetadata, Links};
use crate::{Error, Result};

/// What an uploaded file is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilePurpose {
    /// Evidence for a dispute
    DisputeEvidence,
    /// Bank account verification
    BankVerification,
    /// Identity document of an individual
    IdentityVerification,
    /// Company registration document
    CompanyVerification,
    /// Financial statements
    FinancialVerification,
    /// Any other supporting document
    AdditionalDocument,
}

impl FilePurpose {
    /// The wire value of this purpose.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilePurpose::DisputeEvidence => "dispute_evidence",
            FilePurpose::BankVerification => "bank_verification",
            FilePurpose::IdentityVerification => "identity_verification",
            FilePurpose::CompanyVerification => "company_verification",
            FilePurpose::FinancialVerification => "financial_verification",
            FilePurpose::AdditionalDocument => "additional_document",
        }
    }
}

impl fmt::Display for FilePurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file to upload.
///
/// # Example
///
/// ```
/// use checkout_sdk::models::{FilePurpose, FileRequest};
///
/// let request = FileRequest::new("evidence.pdf", b"%PDF-1.4".to_vec(), FilePurpose::DisputeEvidence)
///     .with_mime_type("application/pdf");
/// assert_eq!(request.file_name, "evidence.pdf");
/// ```
#[derive(Debug, Clone)]
pub struct FileRequest {
    /// File name sent in the multipart part
    pub file_name: String,
    /// File bytes
    pub content: Vec<u8>,
    /// MIME type of the part, guessed from the extension when unset
    pub mime_type: Option<String>,
    /// Purpose of the file
    pub purpose: FilePurpose,
}

impl FileRequest {
    /// Create a request from in-memory bytes.
    pub fn new(file_name: impl Into<String>, content: Vec<u8>, purpose: FilePurpose) -> Self {
        Self {
            file_name: file_name.into(),
            content,
            mime_type: None,
            purpose,
        }
    }

    /// Read a file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and
    /// [`Error::InvalidInput`] if the path has no file name.
    pub async fn from_path(path: impl AsRef<Path>, purpose: FilePurpose) -> Result<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| Error::InvalidInput(format!("No file name in {}", path.display())))?
            .to_string();
        let content = tokio::fs::read(path).await?;
        Ok(Self::new(file_name, content, purpose))
    }

    /// Set the MIME type of the part.
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// MIME type to send: the explicit one, or a guess from the extension.
    pub fn effective_mime_type(&self) -> &str {
        if let Some(ref mime) = self.mime_type {
            return mime;
        }
        let extension = Path::new(&self.file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match extension.as_deref() {
            Some("pdf") => "application/pdf",
            Some("png") => "image/png",
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("csv") => "text/csv",
            _ => "application/octet-stream",
        }
    }

    /// Build the multipart form: a `file` part and a `purpose` field.
    pub(crate) fn into_form(self) -> Result<reqwest::multipart::Form> {
        let mime = self.effective_mime_type().to_string();
        let purpose = self.purpose.as_str();
        let part = reqwest::multipart::Part::bytes(self.content)
            .file_name(self.file_name)
            .mime_str(&mime)
            .map_err(|e| Error::InvalidInput(format!("Invalid MIME type {}: {}", mime, e)))?;

        Ok(reqwest::multipart::Form::new()
            .part("file", part)
            .text("purpose", purpose))
    }
}

/// Metadata of an uploaded file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileResponse {
    /// Response metadata
    #[serde(skip)]
    pub http_metadata: HttpMetadata,
    /// File id
    #[serde(default)]
    pub id: String,
    /// Original file name
    #[serde(default)]
    pub filename: String,
    /// Purpose given at upload
    #[serde(default)]
    pub purpose: Option<String>,
    /// Size in bytes
    #[serde(default)]
    pub size: u64,
    /// Upload time
    #[serde(default)]
    pub uploaded_on: Option<DateTime<Utc>>,
    /// Related links, including `download`
    #[serde(rename = "_links", default)]
    pub links: Links,
}

impl_api_response!(FileResponse);
