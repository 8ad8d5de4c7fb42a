//! Core logic for the file browser.
//!
//! This module provides:
//! - [`classify`] extension lookups for type labels and glyphs
//! - [`load_files`] the fetch/normalize pipeline and source selection
//! - [`ListingView`] display rows and aggregate statistics

pub mod classify;
pub mod error;
mod loader;
mod view;

pub use loader::{GitHubContents, load_files};
pub use view::{FileRow, ListingView};
