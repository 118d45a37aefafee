//! Configuration for the pinning service client
//!
//! Settings come from an optional YAML or JSON file (YAML is a superset, so
//! one parser reads both) and are then overlaid with environment variables.

use crate::aggregator::DEFAULT_PAGE_SIZE;
use crate::auth::AuthConfig;
use crate::error::{Error, Result, ResultExt};
use crate::filter::CidFilter;
use crate::gateway::{Gateway, DEFAULT_GATEWAY};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default pinning API endpoint
pub const DEFAULT_API_URL: &str = "https://api.pinata.cloud";

/// Environment variable holding the public API key
pub const ENV_API_KEY: &str = "PINATA_API_KEY";
/// Environment variable holding the secret API key
pub const ENV_SECRET_KEY: &str = "PINATA_SECRET_KEY";
/// Environment variable holding a scoped JWT
pub const ENV_JWT: &str = "PINATA_JWT";
/// Environment variable overriding the gateway
pub const ENV_GATEWAY: &str = "PINATA_GATEWAY";

// ============================================================================
// Pinata Config
// ============================================================================

/// Complete client configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct PinataConfig {
    /// Base URL of the pinning API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Gateway used for display URLs and content fetches
    #[serde(default = "default_gateway_url")]
    pub gateway_url: String,

    /// Public half of the API key pair
    #[serde(default)]
    pub api_key: Option<String>,

    /// Secret half of the API key pair
    #[serde(default)]
    pub secret_key: Option<String>,

    /// Scoped JWT, used when no key pair is configured
    #[serde(default)]
    pub jwt: Option<String>,

    /// Rows requested per listing page
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Identifier prefixes that belong to the gallery
    #[serde(default)]
    pub cid_prefixes: CidFilter,

    /// Request timeout in seconds (no timeout when absent)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_gateway_url() -> String {
    DEFAULT_GATEWAY.to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for PinataConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            gateway_url: default_gateway_url(),
            api_key: None,
            secret_key: None,
            jwt: None,
            page_size: default_page_size(),
            cid_prefixes: CidFilter::default(),
            timeout_secs: None,
        }
    }
}

impl PinataConfig {
    /// Parse a config from a YAML or JSON string
    pub fn parse(contents: &str) -> Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Load a config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::parse(&contents)
    }

    /// Overlay values from the process environment
    #[must_use]
    pub fn with_env(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Overlay values from an arbitrary lookup; empty values are ignored
    #[must_use]
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = get(ENV_API_KEY) {
            self.api_key = Some(v);
        }
        if let Some(v) = get(ENV_SECRET_KEY) {
            self.secret_key = Some(v);
        }
        if let Some(v) = get(ENV_JWT) {
            self.jwt = Some(v);
        }
        if let Some(v) = get(ENV_GATEWAY) {
            self.gateway_url = v;
        }
        self
    }

    /// Check the config is usable
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::config("page_size must be greater than zero"));
        }
        url::Url::parse(&self.api_url)?;
        self.gateway()?;
        self.auth().map(|_| ())
    }

    /// Credentials to send. The key pair wins over a JWT.
    pub fn auth(&self) -> Result<AuthConfig> {
        match (&self.api_key, &self.secret_key, &self.jwt) {
            (Some(key), Some(secret), _) => Ok(AuthConfig::key_pair(key, secret)),
            (Some(_), None, _) => Err(Error::missing_field("secret_key")),
            (None, Some(_), _) => Err(Error::missing_field("api_key")),
            (None, None, Some(jwt)) => Ok(AuthConfig::bearer(jwt)),
            (None, None, None) => Err(Error::config(format!(
                "no credentials configured (set {ENV_API_KEY} and {ENV_SECRET_KEY}, or {ENV_JWT})"
            ))),
        }
    }

    /// The configured gateway
    pub fn gateway(&self) -> Result<Gateway> {
        Gateway::new(&self.gateway_url)
    }

    /// The configured request timeout
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl std::fmt::Debug for PinataConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PinataConfig")
            .field("api_url", &self.api_url)
            .field("gateway_url", &self.gateway_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("secret_key", &self.secret_key.as_ref().map(|_| "***"))
            .field("jwt", &self.jwt.as_ref().map(|_| "***"))
            .field("page_size", &self.page_size)
            .field("cid_prefixes", &self.cid_prefixes)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
