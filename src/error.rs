//! Error types for tgsession

use crate::session::SessionFormat;

/// Result type alias for tgsession operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting a session string
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The session string is not valid base64
    #[error("malformed session string: {source}")]
    MalformedInput {
        #[from]
        source: base64::DecodeError,
    },

    /// Decoded payload has the wrong size for its format
    #[error("invalid {format} session length: {observed} (expected {expected})")]
    InvalidLength {
        format: SessionFormat,
        observed: usize,
        expected: usize,
    },

    /// Telethon session without its leading `1`
    #[error("invalid Telethon session: must start with '1'")]
    InvalidPrefix,

    /// Unexpected end of data while reading a payload
    #[error("unexpected end of data at offset {offset}")]
    UnexpectedEof { offset: u64 },

    /// Invalid data format or structure
    #[error("invalid data format: {message}")]
    InvalidFormat { message: String },
}

impl Error {
    /// Create an invalid format error with a message
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: msg.into(),
        }
    }

    /// Create a length mismatch error for the given format
    pub fn invalid_length(format: SessionFormat, observed: usize, expected: usize) -> Self {
        Self::InvalidLength {
            format,
            observed,
            expected,
        }
    }
}
