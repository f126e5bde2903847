//! Error types for the terminal client.

use thiserror::Error;

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that stop the client.
#[derive(Debug, Error)]
pub enum Error {
    /// An environment variable held a value we cannot use.
    #[error("invalid {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },

    #[error("candidate source: {0}")]
    Source(#[from] auradeck_deck::SourceError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
