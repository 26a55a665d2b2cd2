//! Error types for the metrics library.

use thiserror::Error;

/// Errors produced by the metrics pipelines, wrapping provider failures and
/// adding request-shape problems. Everything here is caught at the handler
/// boundary and collapsed to the generic fallback envelope; none of these
/// surface their detail to the caller.
#[derive(Error, Debug)]
pub enum MetricsError {
    /// An error from the underlying data client.
    #[error("provider error: {0}")]
    Provider(#[from] apperate_api::Error),
    /// A date bound was present but not a valid YYYY-MM-DD string.
    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    DateParse(String),
    /// A parameter the route requires was absent.
    #[error("missing required parameter '{0}'")]
    MissingParameter(&'static str),
}
