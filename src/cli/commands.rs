//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Gallery client for a content-addressed pinning service
#[derive(Parser, Debug)]
#[command(name = "pin-gallery")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Settings file holding the theme preference
    #[arg(short, long, global = true, default_value = ".pin-gallery/settings.json")]
    pub settings: PathBuf,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every pinned gallery item
    List {
        /// Only show items in this category
        #[arg(long)]
        category: Option<String>,
    },

    /// Upload images concurrently
    Upload {
        /// Image files to upload
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Category stored with each upload
        #[arg(long)]
        category: Option<String>,
    },

    /// Show a pinned JSON document through the gateway
    Show {
        /// Content identifier
        cid: String,
    },

    /// Read or change the theme preference
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
}

/// Theme subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ThemeAction {
    /// Print the current theme (default)
    Get,
    /// Set the theme
    Set {
        /// light or dark
        theme: String,
    },
    /// Switch between light and dark
    Toggle,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one item per line)
    Json,
    /// Human-readable output
    Pretty,
}
