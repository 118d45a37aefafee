//! Authentication module
//!
//! Supports: API key pair headers, Bearer JWT, Custom Headers
//!
//! The pinning service accepts either its classic key pair (two static
//! headers) or a scoped JWT sent as a bearer token.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::{AuthConfig, API_KEY_HEADER, SECRET_KEY_HEADER};
