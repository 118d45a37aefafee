//! Content identifier filtering
//!
//! The listing endpoint returns every pin on the account. Only rows whose
//! identifier carries one of the configured prefixes belong to the gallery.

use serde::{Deserialize, Serialize};

/// Prefix of base58 CIDv0 identifiers
pub const CID_V0_PREFIX: &str = "Qm";

/// Prefix of base32 CIDv1 identifiers
pub const CID_V1_PREFIX: &str = "ba";

/// Identifier-prefix predicate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CidFilter {
    prefixes: Vec<String>,
}

impl CidFilter {
    /// Accept identifiers starting with any of `prefixes`
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// CIDv0 only
    pub fn v0() -> Self {
        Self::new([CID_V0_PREFIX])
    }

    /// CIDv1 only
    pub fn v1() -> Self {
        Self::new([CID_V1_PREFIX])
    }

    /// Whether `content_id` passes. An empty prefix list matches nothing.
    pub fn matches(&self, content_id: &str) -> bool {
        self.prefixes
            .iter()
            .any(|prefix| content_id.starts_with(prefix.as_str()))
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }
}

impl Default for CidFilter {
    fn default() -> Self {
        Self::v0()
    }
}
