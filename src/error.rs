//! Error types for transcribe2srt.

use thiserror::Error;

/// Library-level error type for transcript conversion.
#[derive(Error, Debug)]
pub enum SrtError {
    #[error("Malformed {field} on token {index}: {value:?} is not a non-negative number of seconds")]
    MalformedTimestamp {
        index: usize,
        field: &'static str,
        value: String,
    },

    #[error("Token {index} has no {field}")]
    MissingTimestamp { index: usize, field: &'static str },

    #[error("Transcript item {index} has no alternatives")]
    MissingAlternative { index: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias for transcribe2srt operations.
pub type Result<T> = std::result::Result<T, SrtError>;
