//! Error types for candidate sources.
//!
//! The engine itself never fails; only fetching candidates can.

use thiserror::Error;

/// Result type for candidate source operations.
pub type Result<T> = std::result::Result<T, SourceError>;

/// Errors raised while fetching candidates.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Candidate source unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed candidate payload: {0}")]
    Malformed(String),
}
