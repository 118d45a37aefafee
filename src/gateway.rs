//! Gateway URL derivation
//!
//! Pinned content is served from `<gateway>/ipfs/<cid>`.

use crate::error::{Error, Result};
use url::Url;

/// Default public gateway host
pub const DEFAULT_GATEWAY: &str = "https://gateway.pinata.cloud";

/// A content gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gateway {
    base: String,
}

impl Gateway {
    /// Create a gateway from its base URL
    pub fn new(base: &str) -> Result<Self> {
        let url = Url::parse(base)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "gateway must be an http(s) URL, got '{base}'"
            )));
        }
        Ok(Self {
            base: base.trim_end_matches('/').to_string(),
        })
    }

    /// Display URL for a content identifier
    pub fn url_for(&self, content_id: &str) -> String {
        format!("{}/ipfs/{}", self.base, content_id)
    }

    /// Base URL without trailing slash
    pub fn base(&self) -> &str {
        &self.base
    }
}

impl Default for Gateway {
    fn default() -> Self {
        Self {
            base: DEFAULT_GATEWAY.to_string(),
        }
    }
}
