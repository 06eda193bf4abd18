//! Files service.

use std::sync::Arc;

use crate::auth::AuthorizationType;
use crate::client::ClientInner;
use crate::models::{FileRequest, FileResponse, IdResponse};
use crate::Result;

/// Service for file uploads.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: checkout_sdk::CheckoutClient) -> checkout_sdk::Result<()> {
/// use checkout_sdk::models::{FilePurpose, FileRequest};
///
/// let request = FileRequest::from_path("evidence.pdf", FilePurpose::DisputeEvidence).await?;
/// let uploaded = client.files().upload_file(request).await?;
///
/// let file = client.files().retrieve_file(&uploaded.id).await?;
/// println!("{} ({} bytes)", file.filename, file.size);
/// # Ok(())
/// # }
/// ```
pub struct FilesService {
    inner: Arc<ClientInner>,
}

impl FilesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Upload a file as `multipart/form-data`.
    pub async fn upload_file(&self, request: FileRequest) -> Result<IdResponse> {
        let form = request.into_form()?;
        self.inner
            .upload(&["files"], AuthorizationType::SecretKey, form)
            .await
    }

    /// Get the metadata of an uploaded file.
    pub async fn retrieve_file(&self, file_id: &str) -> Result<FileResponse> {
        self.inner
            .get(&["files", file_id], AuthorizationType::SecretKey)
            .await
    }
}
