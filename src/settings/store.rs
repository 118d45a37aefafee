//! Settings store implementation
//!
//! File-backed preferences with atomic writes.

use super::types::{Settings, Theme};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Owns the user's settings and persists every change
#[derive(Debug, Clone)]
pub struct SettingsStore {
    /// Path to the settings file (empty in memory mode)
    path: PathBuf,
    /// Current settings (cached)
    settings: Arc<RwLock<Settings>>,
}

impl SettingsStore {
    /// Create a store for `path` without reading it
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            settings: Arc::new(RwLock::new(Settings::default())),
        }
    }

    /// Create an in-memory store (no file persistence)
    pub fn in_memory() -> Self {
        Self::new(PathBuf::new())
    }

    /// Open the store at `path`, reading existing settings if present
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let store = Self::new(path);
        store.load().await?;
        Ok(store)
    }

    /// Reload settings from the file.
    ///
    /// A missing file leaves defaults in place; an unparseable one is
    /// logged and replaced by defaults.
    pub async fn load(&self) -> Result<()> {
        if self.is_in_memory() || !self.path.exists() {
            return Ok(());
        }

        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| Error::settings(format!("Failed to read settings file: {e}")))?;

        let loaded = match serde_json::from_str::<Settings>(&contents) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Ignoring malformed settings file");
                Settings::default()
            }
        };

        *self.settings.write().await = loaded;
        Ok(())
    }

    /// Save current settings to the file
    pub async fn save(&self) -> Result<()> {
        if self.is_in_memory() {
            return Ok(());
        }

        let settings = *self.settings.read().await;
        let contents = serde_json::to_string_pretty(&settings)
            .map_err(|e| Error::settings(format!("Failed to serialize settings: {e}")))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| Error::settings(format!("Failed to create settings dir: {e}")))?;
        }

        // Write to temp file first, then rename for atomicity
        let temp_path = self.path.with_extension("tmp");
        tokio::fs::write(&temp_path, &contents)
            .await
            .map_err(|e| Error::settings(format!("Failed to write settings file: {e}")))?;

        tokio::fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| Error::settings(format!("Failed to rename settings file: {e}")))?;

        debug!(path = %self.path.display(), "Settings saved");
        Ok(())
    }

    /// Copy of the current settings
    pub async fn snapshot(&self) -> Settings {
        *self.settings.read().await
    }

    /// Current theme
    pub async fn theme(&self) -> Theme {
        self.settings.read().await.theme
    }

    /// Set the theme and persist it
    pub async fn set_theme(&self, theme: Theme) -> Result<()> {
        self.settings.write().await.theme = theme;
        self.save().await
    }

    /// Flip the theme, persist it, and return the new value
    pub async fn toggle_theme(&self) -> Result<Theme> {
        let theme = {
            let mut settings = self.settings.write().await;
            settings.theme = settings.theme.toggled();
            settings.theme
        };
        self.save().await?;
        Ok(theme)
    }

    /// Get the settings file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if using in-memory mode
    pub fn is_in_memory(&self) -> bool {
        self.path.as_os_str().is_empty()
    }
}
