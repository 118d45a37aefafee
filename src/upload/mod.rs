//! Concurrent uploads
//!
//! Every selected file is pinned by its own request. All requests run at
//! once and are joined with all-settled semantics: one failure neither
//! cancels nor hides the others.

use crate::error::{Error, Result};
use crate::gallery::Category;
use crate::gateway::Gateway;
use crate::types::{PinFileResponse, PinMetadata, PinnedItem, UploadFile};
use async_trait::async_trait;
use futures::future::join_all;
use std::sync::Arc;
use tracing::{error, info};

/// Largest file accepted for upload (25 MiB)
pub const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Summary shown when every upload went through
pub const SUCCESS_MESSAGE: &str = "Files uploaded successfully!";

/// A pinning endpoint accepting one file per request
#[async_trait]
pub trait PinUpload: Send + Sync {
    /// Upload a single file with optional metadata
    async fn pin_file(
        &self,
        file: &UploadFile,
        metadata: Option<&PinMetadata>,
    ) -> Result<PinFileResponse>;
}

#[async_trait]
impl<T: PinUpload + ?Sized> PinUpload for Arc<T> {
    async fn pin_file(
        &self,
        file: &UploadFile,
        metadata: Option<&PinMetadata>,
    ) -> Result<PinFileResponse> {
        (**self).pin_file(file, metadata).await
    }
}

/// Keep only images within the size limit
pub fn select_uploads(files: Vec<UploadFile>) -> Result<Vec<UploadFile>> {
    let valid: Vec<UploadFile> = files
        .into_iter()
        .filter(|f| f.media_type.starts_with("image/") && f.size() <= MAX_UPLOAD_BYTES)
        .collect();

    if valid.is_empty() {
        return Err(Error::validation(
            "Please select valid image files under 25 MB.",
        ));
    }
    Ok(valid)
}

/// A file that could not be pinned
#[derive(Debug)]
pub struct UploadFailure {
    pub name: String,
    pub error: Error,
}

/// Outcome of an upload batch
#[derive(Debug)]
pub struct UploadReport {
    /// Successful uploads, in submission order
    pub uploaded: Vec<PinnedItem>,
    /// Failed uploads, in submission order
    pub failures: Vec<UploadFailure>,
    /// Notification text naming every failed file
    pub message: String,
}

impl UploadReport {
    fn from_results(results: Vec<std::result::Result<PinnedItem, UploadFailure>>) -> Self {
        let total = results.len();
        let mut uploaded = Vec::new();
        let mut failures = Vec::new();
        for result in results {
            match result {
                Ok(item) => uploaded.push(item),
                Err(failure) => failures.push(failure),
            }
        }

        let message = if failures.is_empty() {
            SUCCESS_MESSAGE.to_string()
        } else {
            let mut parts = Vec::with_capacity(failures.len() + 1);
            if !uploaded.is_empty() {
                parts.push(format!("Uploaded {} of {total} files.", uploaded.len()));
            }
            parts.extend(
                failures
                    .iter()
                    .map(|failure| format!("Error uploading {}.", failure.name)),
            );
            parts.join(" ")
        };

        Self {
            uploaded,
            failures,
            message,
        }
    }

    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Fans uploads out to a [`PinUpload`] target
pub struct Uploader<T> {
    target: T,
    gateway: Gateway,
}

impl<T: PinUpload> Uploader<T> {
    /// Create an uploader using the default gateway for display URLs
    pub fn new(target: T) -> Self {
        Self {
            target,
            gateway: Gateway::default(),
        }
    }

    /// Set the gateway used for display URLs
    #[must_use]
    pub fn with_gateway(mut self, gateway: Gateway) -> Self {
        self.gateway = gateway;
        self
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    /// Upload every file concurrently and wait for all of them to settle
    pub async fn upload_all(
        &self,
        files: &[UploadFile],
        category: Option<Category>,
    ) -> Result<UploadReport> {
        if files.is_empty() {
            return Err(Error::validation("No files selected"));
        }

        let uploads = files.iter().map(|file| self.upload_one(file, category));
        let report = UploadReport::from_results(join_all(uploads).await);

        info!(
            uploaded = report.uploaded.len(),
            failed = report.failures.len(),
            "Upload batch settled"
        );
        Ok(report)
    }

    async fn upload_one(
        &self,
        file: &UploadFile,
        category: Option<Category>,
    ) -> std::result::Result<PinnedItem, UploadFailure> {
        let mut metadata = category
            .filter(|c| *c != Category::All)
            .map(|c| PinMetadata::with_category(c.key()))
            .unwrap_or_default();
        metadata.name = Some(file.name.clone());

        match self.target.pin_file(file, Some(&metadata)).await {
            Ok(response) => Ok(PinnedItem {
                display_url: self.gateway.url_for(&response.ipfs_hash),
                content_id: response.ipfs_hash,
                original_name: file.name.clone(),
                media_type: file.media_type_or_default().to_string(),
                category: metadata.category().map(ToString::to_string),
            }),
            Err(e) => {
                error!(file = %file.name, error = %e, "Error uploading file");
                Err(UploadFailure {
                    name: file.name.clone(),
                    error: e,
                })
            }
        }
    }
}
