//! Error types for the Apperate data client.

use thiserror::Error;

/// Errors that can occur when querying an Apperate dataset.
#[derive(Error, Debug)]
pub enum Error {
    /// The API rejected the token (HTTP 401 or 403).
    #[error("Invalid API token")]
    InvalidToken,
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The response body could not be decoded.
    #[error("Failed to parse response: {0}")]
    ParseFailed(String),
    /// Network-level failure (connect, timeout, body read).
    #[error("Network error")]
    Network(#[from] reqwest::Error),
}
