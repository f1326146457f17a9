//! Error types for CardFX

use thiserror::Error;

/// Main error type for card configuration and style tokens
#[derive(Error, Debug)]
pub enum CardError {
    /// Glow color token is not one of the six recognized presets
    #[error("Unknown glow color: {0:?} (expected blue, purple, pink, green, orange or red)")]
    UnknownGlowColor(String),

    /// Style token table failed validation
    #[error("Invalid style tokens: {0}")]
    InvalidTokens(String),

    /// Error while parsing a style token file
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using CardError
pub type CardResult<T> = Result<T, CardError>;
