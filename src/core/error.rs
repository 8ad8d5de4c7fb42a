//! Custom error types for the application.
//!
//! - [`FetchError`] - Network/fetch-related errors for the listing request
//! - [`ConfigError`] - Problems in the bundled `config.toml`

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, offline, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content (not text)
    #[error("Invalid response content")]
    InvalidContent,
    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}

/// Configuration errors raised while loading `BrowserConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML document could not be parsed into a config.
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    /// A field required by the selected mode is empty.
    #[error("missing required field `{0}` for remote mode")]
    MissingField(&'static str),
    /// `log_level` is not one of off/error/warn/info/debug/trace.
    #[error("unknown log level `{0}`")]
    InvalidLogLevel(String),
}
