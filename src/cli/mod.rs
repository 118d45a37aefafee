//! CLI module
//!
//! Command-line interface for the gallery.
//!
//! # Commands
//!
//! - `list` - Walk the pin listing and print gallery items
//! - `upload` - Upload images concurrently
//! - `show` - Print a pinned JSON document
//! - `theme` - Read or change the theme preference

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, ThemeAction};
pub use runner::Runner;
