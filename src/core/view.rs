//! Display model for the file browser.
//!
//! [`ListingView`] is what the components render: one formatted row per
//! file plus aggregate statistics. It is rebuilt from scratch on every load.

use chrono::NaiveDate;

use crate::models::FileEntry;
use crate::utils::{humanize_date, humanize_size};

/// One row of the file list, with all values already formatted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileRow {
    pub icon: String,
    pub name: String,
    pub file_type: String,
    pub size: String,
    pub date: String,
    pub download_url: String,
}

impl FileRow {
    fn new(entry: &FileEntry, today: NaiveDate) -> Self {
        Self {
            icon: entry.icon.clone(),
            name: entry.name.clone(),
            file_type: entry.file_type.clone(),
            size: humanize_size(entry.size),
            date: humanize_date(entry.date, today),
            download_url: entry.download_url.clone(),
        }
    }
}

/// Aggregates over a non-empty listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingStats {
    pub total_files: usize,
    pub total_bytes: u64,
    pub latest: NaiveDate,
}

impl ListingStats {
    /// `None` for an empty listing.
    pub fn from_entries(entries: &[FileEntry]) -> Option<Self> {
        let latest = entries.iter().map(|e| e.date).max()?;
        Some(Self {
            total_files: entries.len(),
            total_bytes: entries.iter().map(|e| e.size).sum(),
            latest,
        })
    }
}

/// Rows and statistics for one render of the listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListingView {
    pub rows: Vec<FileRow>,
    pub stats: Option<ListingStats>,
    today: Option<NaiveDate>,
}

impl ListingView {
    /// Build the view for `entries` in their given order.
    pub fn build(entries: &[FileEntry], today: NaiveDate) -> Self {
        Self {
            rows: entries.iter().map(|e| FileRow::new(e, today)).collect(),
            stats: ListingStats::from_entries(entries),
            today: Some(today),
        }
    }

    pub fn total_files_label(&self) -> String {
        self.stats
            .as_ref()
            .map_or(0, |s| s.total_files)
            .to_string()
    }

    pub fn total_size_label(&self) -> String {
        humanize_size(self.stats.as_ref().map_or(0, |s| s.total_bytes))
    }

    /// Most recent date, humanized like the row dates; "-" when empty.
    pub fn last_update_label(&self) -> String {
        match (&self.stats, self.today) {
            (Some(stats), Some(today)) => humanize_date(stats.latest, today),
            _ => "-".to_string(),
        }
    }
}
