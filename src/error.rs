//! Error types for the yiffdl application.

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    // URL-list scanning errors
    #[error("Could not extract a post id from line: {0}")]
    Scan(String),

    // Platform API errors
    #[error("API error: {0}")]
    Api(String),

    // Download errors
    #[error("Download failed: {0}")]
    Download(String),

    // Media metadata errors
    #[error("Invalid media: {0}")]
    Media(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
///
/// Per-item download failures are reported inline and do not affect the
/// exit code; only run-level failures do.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const INPUT_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const UNEXPECTED_ERROR: i32 = 5;
}
