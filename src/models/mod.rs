//! Data models and types for the application.
//!
//! - [`RawEntry`], [`EntryKind`] - Items of a GitHub contents listing
//! - [`FileEntry`] - Normalized, display-ready file record

mod listing;

pub use listing::{FileEntry, RawEntry, folder_path, normalize};
#[cfg(test)]
pub use listing::EntryKind;
