//! Settings module
//!
//! User preferences that outlive a session. Today that is the theme.
//!
//! # Overview
//!
//! - `Settings` - the persisted preference values
//! - `SettingsStore` - owns the settings behind an explicit read/write API
//!   and persists them to a JSON file
//!
//! Nothing reads preferences from ambient global state; callers hold a
//! `SettingsStore` and pass it where it is needed.

mod store;
mod types;

pub use store::SettingsStore;
pub use types::{Settings, Theme};
