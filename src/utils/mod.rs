//! Utility modules for web and formatting operations.
//!
//! Provides:
//! - [`fetch_json`] - Network fetching with timeout
//! - [`humanize_size`], [`humanize_date`] - Display formatting
//! - [`logger`] - Browser console sink for the `log` facade

mod fetch;
pub mod format;
pub mod logger;

pub use fetch::fetch_json;
pub use format::{humanize_date, humanize_size};
