//! CLI runner - executes commands

use crate::aggregator::PinAggregator;
use crate::cli::commands::{Cli, Commands, OutputFormat, ThemeAction};
use crate::config::PinataConfig;
use crate::error::Result;
use crate::gallery::{filter_by_category, Category};
use crate::pinata::{GatewayClient, PinataClient};
use crate::settings::{SettingsStore, Theme};
use crate::types::{PinnedItem, UploadFile};
use crate::upload::{select_uploads, Uploader};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::List { category } => self.list(category.as_deref()).await,
            Commands::Upload { files, category } => {
                self.upload(files, category.as_deref()).await
            }
            Commands::Show { cid } => self.show(cid).await,
            Commands::Theme { action } => {
                let theme = self
                    .theme(action.clone().unwrap_or(ThemeAction::Get))
                    .await?;
                println!("{theme}");
                Ok(())
            }
        }
    }

    /// Load configuration from file (if given) and the environment
    fn load_config(&self) -> Result<PinataConfig> {
        let config = match &self.cli.config {
            Some(path) => PinataConfig::from_file(path)?,
            None => PinataConfig::default(),
        };
        Ok(config.with_env())
    }

    /// Walk the listing and print items
    async fn list(&self, category: Option<&str>) -> Result<()> {
        let category = category
            .map(str::parse::<Category>)
            .transpose()?
            .unwrap_or_default();
        let config = self.load_config()?;
        let client = Arc::new(PinataClient::new(&config)?);

        let aggregator = PinAggregator::new(client)
            .with_page_size(config.page_size)?
            .with_filter(config.cid_prefixes.clone())
            .with_gateway(config.gateway()?);

        let start = Instant::now();
        let outcome = aggregator.fetch_all().await;
        info!(
            items = outcome.items.len(),
            pages = outcome.pages_requested,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Gallery loaded"
        );

        if let Some(e) = &outcome.error {
            // Partial listings are still shown
            eprintln!("Error fetching uploaded files: {e}");
        }

        let items = filter_by_category(&outcome.items, category);
        if items.is_empty() && self.cli.format == OutputFormat::Pretty {
            println!("No files uploaded yet.");
            return Ok(());
        }
        self.print_items(&items)
    }

    /// Upload the given files concurrently
    async fn upload(&self, paths: &[std::path::PathBuf], category: Option<&str>) -> Result<()> {
        let category = category.map(str::parse::<Category>).transpose()?;
        let config = self.load_config()?;

        let mut files = Vec::with_capacity(paths.len());
        for path in paths {
            files.push(UploadFile::from_path(path).await?);
        }

        let selected = select_uploads(files)?;
        let skipped = paths.len() - selected.len();
        if skipped > 0 {
            warn!(skipped, "Skipping files that are not images under 25 MB");
        }

        let client = PinataClient::new(&config)?;
        let uploader = Uploader::new(client).with_gateway(config.gateway()?);
        let report = uploader.upload_all(&selected, category).await?;

        if report.all_succeeded() {
            println!("{}", report.message);
        } else {
            eprintln!("{}", report.message);
        }
        self.print_items(&report.uploaded)
    }

    /// Print a pinned JSON document. Needs no credentials.
    async fn show(&self, cid: &str) -> Result<()> {
        let config = self.load_config()?;
        let client = GatewayClient::new(&config)?;
        let content = client.fetch_content(cid).await?;

        let rendered = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(&content)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(&content)?,
        };
        println!("{rendered}");
        Ok(())
    }

    /// Apply a theme action and return the resulting theme
    async fn theme(&self, action: ThemeAction) -> Result<Theme> {
        let store = SettingsStore::open(&self.cli.settings).await?;
        match action {
            ThemeAction::Get => Ok(store.theme().await),
            ThemeAction::Set { theme } => {
                let theme: Theme = theme.parse()?;
                store.set_theme(theme).await?;
                Ok(theme)
            }
            ThemeAction::Toggle => store.toggle_theme().await,
        }
    }

    fn print_items(&self, items: &[PinnedItem]) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => {
                for item in items {
                    println!("{}", serde_json::to_string(item)?);
                }
            }
            OutputFormat::Pretty => {
                for (index, item) in items.iter().enumerate() {
                    println!("{}", pretty_line(index, item));
                }
            }
        }
        Ok(())
    }
}

fn pretty_line(index: usize, item: &PinnedItem) -> String {
    let mut line = format!("{:>3}. {}  {}", index + 1, item.original_name, item.display_url);
    if let Some(category) = item
        .category
        .as_deref()
        .and_then(|c| c.parse::<Category>().ok())
    {
        line.push_str(&format!("  [{category}]"));
    }
    line
}
