//! Listing pipeline: fetch, normalize, and pick the configured source.
//!
//! Every failure on the remote path ends as an empty list plus a log line;
//! nothing is returned to the caller as an error.

use std::future::Future;

use chrono::NaiveDate;
use log::{debug, error, info, warn};

use crate::config::{BrowserConfig, GITHUB_ACCEPT, SourceMode};
use crate::core::error::FetchError;
use crate::models::{FileEntry, RawEntry, normalize};
use crate::utils::fetch_json;

/// Something that can produce a raw directory listing.
pub trait ListingSource {
    /// Fetch the listing once. No retries.
    fn list_entries(&self) -> impl Future<Output = Result<Vec<RawEntry>, FetchError>>;
}

/// GitHub contents endpoint for one folder.
#[derive(Clone, Debug)]
pub struct GitHubContents {
    url: String,
}

impl GitHubContents {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn from_config(config: &BrowserConfig) -> Self {
        Self::new(config.contents_url())
    }
}

impl ListingSource for GitHubContents {
    async fn list_entries(&self) -> Result<Vec<RawEntry>, FetchError> {
        debug!("GET {}", self.url);
        fetch_json(&self.url, GITHUB_ACCEPT).await
    }
}

/// Fetch and normalize a remote listing.
///
/// Only the first page the endpoint returns is seen; larger folders are
/// truncated by the API.
pub async fn fetch_files<S: ListingSource>(
    source: &S,
    public_folder: &str,
    today: NaiveDate,
) -> Vec<FileEntry> {
    match source.list_entries().await {
        Ok(raw) => normalize(raw, public_folder, today),
        Err(e) => {
            error!("Failed to load file listing: {}", e);
            Vec::new()
        }
    }
}

/// Load the file list from whichever source the config selects.
pub async fn load_files<S: ListingSource>(
    config: &BrowserConfig,
    source: &S,
    today: NaiveDate,
) -> Vec<FileEntry> {
    info!("Loading file browser (mode: {:?}, folder: {})", config.mode, config.folder);

    match config.mode {
        SourceMode::Remote => {
            info!("Fetching listing from GitHub API");
            let files = fetch_files(source, &config.folder, today).await;

            if files.is_empty() {
                warn!("No files found, or the listing failed to load");
                warn!("Check the configuration:");
                warn!("- owner: {}", config.owner);
                warn!("- repo: {}", config.repo);
                warn!("- folder: {}", config.folder);
            } else {
                info!("Loaded {} file(s)", files.len());
            }
            files
        }
        SourceMode::Manual => {
            info!("Using manual file list");
            config.manual_entries()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::models::EntryKind;

    /// In-memory source that counts how often it was asked.
    struct StubSource {
        result: Result<Vec<RawEntry>, FetchError>,
        calls: Cell<usize>,
    }

    impl StubSource {
        fn new(result: Result<Vec<RawEntry>, FetchError>) -> Self {
            Self {
                result,
                calls: Cell::new(0),
            }
        }
    }

    impl ListingSource for StubSource {
        async fn list_entries(&self) -> Result<Vec<RawEntry>, FetchError> {
            self.calls.set(self.calls.get() + 1);
            self.result.clone()
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 14).unwrap()
    }

    fn remote_config() -> BrowserConfig {
        BrowserConfig {
            mode: SourceMode::Remote,
            owner: "octo".into(),
            repo: "site".into(),
            ..Default::default()
        }
    }

    fn contents_payload() -> Vec<RawEntry> {
        let json = r#"[
            {"name": "report.pdf", "type": "file", "size": 1250000,
             "download_url": "https://raw.githubusercontent.com/octo/site/main/public/report.pdf"},
            {"name": "images", "type": "dir", "size": 0, "download_url": null},
            {"name": ".hidden", "type": "file", "size": 3,
             "download_url": "https://raw.githubusercontent.com/octo/site/main/public/.hidden"},
            {"name": "data.csv", "type": "file", "size": 2048,
             "download_url": "https://raw.githubusercontent.com/octo/site/main/public/data.csv"}
        ]"#;
        serde_json::from_str(json).unwrap()
    }

    #[tokio::test]
    async fn test_remote_keeps_only_visible_files() {
        let source = StubSource::new(Ok(contents_payload()));
        let files = load_files(&remote_config(), &source, today()).await;

        let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["report.pdf", "data.csv"]);
        assert!(files.iter().all(|f| f.date == today()));
        assert_eq!(files[1].file_type, "CSV");
        assert_eq!(source.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_fetch_failure_degrades_to_empty() {
        for err in [
            FetchError::HttpError(404),
            FetchError::NetworkError("offline".into()),
            FetchError::JsonParseError("expected value".into()),
            FetchError::Timeout,
        ] {
            let source = StubSource::new(Err(err));
            let files = load_files(&remote_config(), &source, today()).await;
            assert!(files.is_empty());
        }
    }

    #[tokio::test]
    async fn test_manual_mode_skips_fetch() {
        let mut config = BrowserConfig::from_toml(
            r#"
            [[manual_files]]
            name = "documento.pdf"
            size = 1250000
            date = "2025-02-10"
            "#,
        )
        .unwrap();
        config.mode = SourceMode::Manual;

        let source = StubSource::new(Ok(contents_payload()));
        let files = load_files(&config, &source, today()).await;

        assert_eq!(source.calls.get(), 0);
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "documento.pdf");
        assert_eq!(files[0].download_url, "public/documento.pdf");
    }

    #[tokio::test]
    async fn test_fetch_files_builds_relative_url_when_missing() {
        let source = StubSource::new(Ok(vec![RawEntry {
            name: "notes.txt".into(),
            kind: EntryKind::File,
            size: 12,
            download_url: None,
        }]));
        let files = fetch_files(&source, "public", today()).await;
        assert_eq!(files[0].download_url, "public/notes.txt");
    }

    #[test]
    fn test_github_contents_url() {
        let source = GitHubContents::from_config(&remote_config());
        assert_eq!(
            source.url,
            "https://api.github.com/repos/octo/site/contents/public"
        );
    }
}
