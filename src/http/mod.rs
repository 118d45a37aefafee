//! HTTP client module
//!
//! Thin reqwest wrapper used by the pinning client.
//!
//! # Features
//!
//! - **Base URL**: relative paths resolve against a configured base
//! - **Authentication**: integration with the auth module
//! - **Status classification**: non-2xx responses become `Error::HttpStatus`
//! - **Multipart**: form uploads for file pinning
//!
//! Requests are issued exactly once. Callers decide what a failure means.

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig, USER_AGENT};
