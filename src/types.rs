//! Common types used throughout pin-gallery
//!
//! Wire types for the pinning API and the gallery records built from them.

use crate::error::{Error, Result, ResultExt};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

/// Media type used when a row or a file does not carry one
pub const DEFAULT_MEDIA_TYPE: &str = "application/octet-stream";

/// Metadata key under which the gallery stores an item's category
pub const CATEGORY_KEY: &str = "category";

// ============================================================================
// Listing
// ============================================================================

/// Response body of the pin listing endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PinListResponse {
    /// Total number of pins the service reports (informational only)
    #[serde(default)]
    pub count: Option<u64>,
    /// Rows of the requested page
    #[serde(default)]
    pub rows: Vec<PinRow>,
}

/// A raw row returned by the listing endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PinRow {
    /// Content identifier of the pinned object
    pub ipfs_pin_hash: String,
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
    /// Informational; unreadable timestamps become `None`
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub date_pinned: Option<DateTime<Utc>>,
    #[serde(default)]
    pub metadata: Option<PinRowMetadata>,
}

/// Metadata block attached to a pin
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PinRowMetadata {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub keyvalues: Option<HashMap<String, Value>>,
}

fn lenient_timestamp<'de, D>(deserializer: D) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc)))
}

impl PinRow {
    /// Create a bare row with only an identifier
    pub fn new(ipfs_pin_hash: impl Into<String>) -> Self {
        Self {
            ipfs_pin_hash: ipfs_pin_hash.into(),
            ..Default::default()
        }
    }

    /// Look up a string key-value from the row metadata
    pub fn keyvalue(&self, key: &str) -> Option<&str> {
        self.metadata
            .as_ref()?
            .keyvalues
            .as_ref()?
            .get(key)?
            .as_str()
    }
}

// ============================================================================
// Gallery Records
// ============================================================================

/// An item shown in the gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinnedItem {
    /// Content identifier
    pub content_id: String,
    /// Gateway URL the item is displayed from
    pub display_url: String,
    /// Name shown for the item
    pub original_name: String,
    /// Media type of the content
    pub media_type: String,
    /// Gallery category, when one was attached at upload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl PinnedItem {
    /// Build an item from a listing row. The identifier doubles as the name.
    pub fn from_row(row: &PinRow, display_url: String) -> Self {
        Self {
            content_id: row.ipfs_pin_hash.clone(),
            display_url,
            original_name: row.ipfs_pin_hash.clone(),
            media_type: row
                .mime_type
                .clone()
                .unwrap_or_else(|| DEFAULT_MEDIA_TYPE.to_string()),
            category: row.keyvalue(CATEGORY_KEY).map(ToString::to_string),
        }
    }
}

// ============================================================================
// Uploads
// ============================================================================

/// A file selected for upload
#[derive(Debug, Clone)]
pub struct UploadFile {
    /// File name as chosen by the user
    pub name: String,
    /// Media type (may be empty when unknown)
    pub media_type: String,
    /// File contents
    pub bytes: Bytes,
}

impl UploadFile {
    /// Create an upload file from in-memory contents
    pub fn new(
        name: impl Into<String>,
        media_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a file from disk, guessing its media type from the extension
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let media_type = mime_guess::from_path(path)
            .first()
            .map(|m| m.essence_str().to_string())
            .unwrap_or_default();

        Ok(Self::new(name, media_type, bytes))
    }

    /// Size of the contents in bytes
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Media type, falling back to the generic binary type
    pub fn media_type_or_default(&self) -> &str {
        if self.media_type.is_empty() {
            DEFAULT_MEDIA_TYPE
        } else {
            &self.media_type
        }
    }
}

/// Metadata sent alongside an upload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub keyvalues: HashMap<String, String>,
}

impl PinMetadata {
    /// Metadata carrying only a category
    pub fn with_category(category: impl Into<String>) -> Self {
        let mut keyvalues = HashMap::new();
        keyvalues.insert(CATEGORY_KEY.to_string(), category.into());
        Self {
            name: None,
            keyvalues,
        }
    }

    /// Category key-value, if present
    pub fn category(&self) -> Option<&str> {
        self.keyvalues.get(CATEGORY_KEY).map(String::as_str)
    }
}

/// Response body of the upload endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PinFileResponse {
    #[serde(rename = "IpfsHash")]
    pub ipfs_hash: String,
    #[serde(rename = "PinSize", default)]
    pub pin_size: Option<u64>,
    #[serde(rename = "Timestamp", default)]
    pub timestamp: Option<String>,
}
