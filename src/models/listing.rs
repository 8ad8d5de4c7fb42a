//! Directory listing types: raw API items and normalized file entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::classify;

// =============================================================================
// Raw API Entries
// =============================================================================

/// Kind of item reported by the contents endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
    /// Symlinks, submodules and anything newer.
    #[serde(other)]
    Other,
}

/// One item of a GitHub contents listing, as returned by the API.
///
/// Only the fields the browser uses are kept; the rest of the payload is
/// ignored during deserialization.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(default)]
    pub size: u64,
    pub download_url: Option<String>,
}

impl RawEntry {
    /// Regular, non-hidden file.
    pub fn is_listable(&self) -> bool {
        self.kind == EntryKind::File && !self.name.starts_with('.')
    }
}

// =============================================================================
// File Entries
// =============================================================================

/// Display-ready description of one downloadable file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileEntry {
    /// Original file name
    pub name: String,
    /// Friendly type label or uppercased extension
    pub file_type: String,
    /// Size in bytes
    pub size: u64,
    /// Calendar date shown in the listing
    pub date: NaiveDate,
    /// Display glyph
    pub icon: String,
    /// Where the download link points
    pub download_url: String,
}

impl FileEntry {
    /// Normalize a raw API item.
    ///
    /// The contents endpoint has no modification time, so `date` is the
    /// date of the load.
    pub fn from_raw(raw: RawEntry, public_folder: &str, today: NaiveDate) -> Self {
        let (file_type, icon) = classify::classify(&raw.name);
        let download_url = raw
            .download_url
            .unwrap_or_else(|| folder_path(public_folder, &raw.name));

        Self {
            name: raw.name,
            file_type,
            size: raw.size,
            date: today,
            icon: icon.to_string(),
            download_url,
        }
    }
}

/// Relative path of a file inside the public folder.
pub fn folder_path(public_folder: &str, name: &str) -> String {
    let folder = public_folder.trim_end_matches('/');
    if folder.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", folder, name)
    }
}

/// Keep listable items and normalize them, preserving source order.
pub fn normalize(raw: Vec<RawEntry>, public_folder: &str, today: NaiveDate) -> Vec<FileEntry> {
    raw.into_iter()
        .filter(RawEntry::is_listable)
        .map(|entry| FileEntry::from_raw(entry, public_folder, today))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    fn raw(name: &str, kind: EntryKind, url: Option<&str>) -> RawEntry {
        RawEntry {
            name: name.to_string(),
            kind,
            size: 10,
            download_url: url.map(str::to_string),
        }
    }

    #[test]
    fn test_deserialize_contents_payload() {
        let json = r#"[
            {"name": "a.pdf", "path": "public/a.pdf", "type": "file", "size": 5,
             "download_url": "https://raw.githubusercontent.com/u/r/main/public/a.pdf"},
            {"name": "docs", "type": "dir", "size": 0, "download_url": null},
            {"name": "vendor", "type": "submodule", "size": 0, "download_url": null}
        ]"#;
        let entries: Vec<RawEntry> = serde_json::from_str(json).unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].kind, EntryKind::File);
        assert_eq!(entries[1].kind, EntryKind::Dir);
        assert_eq!(entries[2].kind, EntryKind::Other);
        assert_eq!(entries[1].download_url, None);
    }

    #[test]
    fn test_normalize_filters_dirs_and_hidden() {
        let listing = vec![
            raw("b.zip", EntryKind::File, Some("https://x/b.zip")),
            raw("sub", EntryKind::Dir, None),
            raw(".gitkeep", EntryKind::File, None),
            raw("a.md", EntryKind::File, None),
        ];
        let files = normalize(listing, "public", today());

        let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["b.zip", "a.md"]);
    }

    #[test]
    fn test_from_raw_fills_fields() {
        let file = FileEntry::from_raw(raw("notes.md", EntryKind::File, None), "public/", today());

        assert_eq!(file.file_type, "Markdown");
        assert_eq!(file.icon, "📃");
        assert_eq!(file.date, today());
        assert_eq!(file.size, 10);
        assert_eq!(file.download_url, "public/notes.md");
    }

    #[test]
    fn test_from_raw_keeps_absolute_url() {
        let file = FileEntry::from_raw(
            raw("a.pdf", EntryKind::File, Some("https://cdn.example/a.pdf")),
            "public",
            today(),
        );
        assert_eq!(file.download_url, "https://cdn.example/a.pdf");
    }

    #[test]
    fn test_folder_path() {
        assert_eq!(folder_path("public", "a.txt"), "public/a.txt");
        assert_eq!(folder_path("", "a.txt"), "a.txt");
    }
}
