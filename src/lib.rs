// Allow common clippy pedantic lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # pin-gallery
//!
//! Client library for a gallery backed by a content-addressed pinning
//! service.
//!
//! ## Features
//!
//! - **Page walk**: sequential offset pagination over the pin listing,
//!   keeping partial results when a page fails
//! - **Concurrent uploads**: one request per file, joined with
//!   all-settled semantics
//! - **Categories**: filter gallery items by the category stored at upload
//! - **Settings**: theme preference with an explicit read/write store
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pin_gallery::{PinAggregator, PinataClient, PinataConfig, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = PinataConfig::default().with_env();
//!     let client = PinataClient::new(&config)?;
//!
//!     let aggregator = PinAggregator::new(client).with_page_size(config.page_size)?;
//!     let outcome = aggregator.fetch_all().await;
//!     for item in &outcome.items {
//!         println!("{} {}", item.original_name, item.display_url);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────┬─────────────────────────────────┐
//! │   PinAggregator (page walk)  │   Uploader (fan-out, join_all)  │
//! └──────────────┬───────────────┴────────────────┬────────────────┘
//!           PinListing                        PinUpload
//!                └──────────── PinataClient ──────┘
//!                                   │
//!                 ┌─────────────────┼─────────────────┐
//!                 │   HttpClient    │      Auth       │
//!                 │  status → Error │  key pair / JWT │
//!                 └─────────────────┴─────────────────┘
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Wire types and gallery records
pub mod types;

/// Authentication implementations
pub mod auth;

/// HTTP client
pub mod http;

/// Offset pagination
pub mod pagination;

/// Content identifier filtering
pub mod filter;

/// Gateway URL derivation
pub mod gateway;

/// Gallery categories
pub mod gallery;

/// Paginated retrieval of pinned items
pub mod aggregator;

/// Concurrent uploads
pub mod upload;

/// Pinning service client
pub mod pinata;

/// Client configuration
pub mod config;

/// User settings (theme preference)
pub mod settings;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use aggregator::{FetchOutcome, LoadingFlag, PinAggregator, PinListing, WalkStatus};
pub use config::PinataConfig;
pub use error::{Error, Result};
pub use pinata::PinataClient;
pub use types::*;
pub use upload::{PinUpload, UploadReport, Uploader};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
