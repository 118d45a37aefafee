//! Auth configuration types

/// Header carrying the public half of the key pair
pub const API_KEY_HEADER: &str = "pinata_api_key";

/// Header carrying the secret half of the key pair
pub const SECRET_KEY_HEADER: &str = "pinata_secret_api_key";

/// Authentication configuration
#[derive(Clone, Default)]
pub enum AuthConfig {
    /// No authentication required
    #[default]
    None,

    /// Static API key pair sent as two headers
    ApiKeyPair {
        /// Public API key
        api_key: String,
        /// Secret API key
        secret_key: String,
    },

    /// Bearer token authentication (scoped JWT)
    Bearer {
        /// The bearer token
        token: String,
    },
}

impl AuthConfig {
    /// Create a key pair config
    pub fn key_pair(api_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self::ApiKeyPair {
            api_key: api_key.into(),
            secret_key: secret_key.into(),
        }
    }

    /// Create a bearer config
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }

    /// Short name of the auth kind, safe to log
    pub fn kind(&self) -> &'static str {
        match self {
            AuthConfig::None => "none",
            AuthConfig::ApiKeyPair { .. } => "api_key_pair",
            AuthConfig::Bearer { .. } => "bearer",
        }
    }
}

// Secrets stay out of logs and panic messages.
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("AuthConfig").field(&self.kind()).finish()
    }
}
