//! Error types for auradeck-persona.

use thiserror::Error;

/// Result type for persona parsing operations.
pub type Result<T> = std::result::Result<T, PersonaError>;

/// Errors raised while parsing persona values from untrusted text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersonaError {
    /// Aura color is not a `#RRGGBB` hex value.
    #[error("invalid aura color {0:?}: expected #RRGGBB")]
    InvalidColor(String),

    /// Gender tag is not one of `M`, `F`, `NB`.
    #[error("invalid gender tag {0:?}: expected M, F or NB")]
    InvalidGender(String),

    /// Personality axis name is unknown.
    #[error("unknown personality axis {0:?}")]
    UnknownAxis(String),
}
