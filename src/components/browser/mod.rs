//! File browser UI components.
//!
//! Components:
//! - [`FileBrowser`] - Loads the listing and lays out the regions below
//! - [`FileList`] - One row per file with a download link, or the empty state
//! - [`StatsBar`] - Total count, total size and last update

#[allow(clippy::module_inception)]
mod browser;
mod file_list;
mod stats;

pub use browser::FileBrowser;
pub use file_list::FileList;
pub use stats::StatsBar;
