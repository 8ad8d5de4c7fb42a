//! Application configuration.
//!
//! Compile-time constants live here next to [`BrowserConfig`], the value
//! read from `assets/config.toml` and handed to the app at startup.

use std::str::FromStr;
use std::time::Duration;

use chrono::NaiveDate;
use log::LevelFilter;
use serde::Deserialize;

use crate::core::classify;
use crate::core::error::ConfigError;
use crate::models::{FileEntry, folder_path};

// =============================================================================
// Bundled Assets (loaded at compile time)
// =============================================================================

/// Default configuration shipped with the page.
pub const BUNDLED_CONFIG: &str = include_str!("../assets/config.toml");

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the page header.
pub const APP_NAME: &str = "pubdir";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Network Configuration
// =============================================================================

/// Base URL of the GitHub REST API.
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Media type requested from the contents endpoint.
pub const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used for UI chrome (download button, empty state).
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

// =============================================================================
// Runtime Configuration
// =============================================================================

/// Where the file list comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceMode {
    /// GitHub contents API
    #[serde(alias = "github-api")]
    Remote,
    /// The `manual_files` list below
    #[default]
    Manual,
}

/// A file listed by hand in `config.toml`.
///
/// `type` and `icon` are used verbatim when present; otherwise they are
/// derived from the extension like remote entries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ManualFile {
    pub name: String,
    #[serde(rename = "type")]
    pub file_type: Option<String>,
    pub size: u64,
    pub date: NaiveDate,
    pub icon: Option<String>,
    pub download_url: Option<String>,
}

/// Browser configuration, fixed for the lifetime of the page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BrowserConfig {
    pub mode: SourceMode,
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Folder inside the repository that gets listed
    pub folder: String,
    /// Branch, tag or commit; the default branch when absent
    pub branch: Option<String>,
    /// Reload period in minutes; 0 disables reloading
    pub refresh_minutes: u32,
    /// Console log level
    pub log_level: String,
    pub manual_files: Vec<ManualFile>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            mode: SourceMode::Manual,
            owner: String::new(),
            repo: String::new(),
            folder: "public".to_string(),
            branch: None,
            refresh_minutes: 0,
            log_level: "info".to_string(),
            manual_files: Vec::new(),
        }
    }
}

impl BrowserConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// The configuration bundled with the page.
    pub fn bundled() -> Result<Self, ConfigError> {
        Self::from_toml(BUNDLED_CONFIG)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.mode == SourceMode::Remote {
            if self.owner.trim().is_empty() {
                return Err(ConfigError::MissingField("owner"));
            }
            if self.repo.trim().is_empty() {
                return Err(ConfigError::MissingField("repo"));
            }
        }
        self.level_filter()?;
        Ok(())
    }

    /// Parsed `log_level`.
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    /// Reload period, if reloading is enabled.
    pub fn refresh_interval(&self) -> Option<Duration> {
        (self.refresh_minutes > 0).then(|| Duration::from_secs(u64::from(self.refresh_minutes) * 60))
    }

    /// GitHub contents endpoint for the configured folder.
    pub fn contents_url(&self) -> String {
        let mut url = format!(
            "{}/repos/{}/{}/contents/{}",
            GITHUB_API_BASE,
            self.owner,
            self.repo,
            self.folder.trim_matches('/')
        );
        if let Some(branch) = &self.branch {
            url.push_str("?ref=");
            url.push_str(branch);
        }
        url
    }

    /// Manual list as file entries, in declaration order.
    pub fn manual_entries(&self) -> Vec<FileEntry> {
        self.manual_files
            .iter()
            .map(|file| FileEntry {
                name: file.name.clone(),
                file_type: file
                    .file_type
                    .clone()
                    .unwrap_or_else(|| classify::file_type(&file.name)),
                size: file.size,
                date: file.date,
                icon: file
                    .icon
                    .clone()
                    .unwrap_or_else(|| classify::file_icon(&file.name).to_string()),
                download_url: file
                    .download_url
                    .clone()
                    .unwrap_or_else(|| folder_path(&self.folder, &file.name)),
            })
            .collect()
    }
}
