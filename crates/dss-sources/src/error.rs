//! Source loading error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while fetching or decoding a dataset.
#[derive(Debug, Error)]
pub enum SourceError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the server.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The server returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// Reading a local source file failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON directory could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A tabular export could not be decoded.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The document decoded but does not have the expected shape.
    #[error("parse error: {0}")]
    Parse(String),
}
