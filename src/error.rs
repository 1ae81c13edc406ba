//! Error types for the MaaP bot SDK

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// SDK errors
#[derive(Debug, Error)]
pub enum Error {
    /// A required credential was missing at construction time.
    #[error("Missing {0}.")]
    Config(&'static str),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The platform reported a failure: a non-2xx response, or an `error`
    /// field inside an otherwise successful body.
    #[error("API error: {0}")]
    Api(serde_json::Value),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
