//! Authenticator implementation
//!
//! Applies the configured credentials to outgoing requests.

use super::types::{AuthConfig, API_KEY_HEADER, SECRET_KEY_HEADER};
use crate::error::{Error, Result};
use reqwest::RequestBuilder;

/// Authenticator handles applying authentication to HTTP requests
#[derive(Debug, Clone)]
pub struct Authenticator {
    config: AuthConfig,
}

impl Authenticator {
    /// Create a new authenticator with the given config
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// Apply authentication to a request builder
    pub fn apply(&self, req: RequestBuilder) -> Result<RequestBuilder> {
        match &self.config {
            AuthConfig::None => Ok(req),

            AuthConfig::ApiKeyPair {
                api_key,
                secret_key,
            } => {
                if api_key.is_empty() || secret_key.is_empty() {
                    return Err(Error::auth("API key pair is incomplete"));
                }
                Ok(req
                    .header(API_KEY_HEADER, api_key.as_str())
                    .header(SECRET_KEY_HEADER, secret_key.as_str()))
            }

            AuthConfig::Bearer { token } => {
                if token.is_empty() {
                    return Err(Error::auth("Bearer token is empty"));
                }
                Ok(req.bearer_auth(token))
            }
        }
    }
}
