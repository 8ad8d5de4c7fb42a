//! UI components built with Leptos.
//!
//! - [`browser`] - File list, statistics and empty state
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod browser;
pub mod icons;

pub use browser::FileBrowser;
