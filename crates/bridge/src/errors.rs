use std::io;
use thiserror::Error;

/// Failure reported for a backend call.
///
/// Only backends construct these. Proxies hand them back to the caller as-is.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CallError {
    #[error("Unknown backend call: {0}")]
    UnknownCall(String),

    #[error("Argument mismatch in {call}: {reason}")]
    ArgumentMismatch { call: String, reason: String },

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Transport error: {message}")]
    Transport { kind: io::ErrorKind, message: String },
}

impl From<io::Error> for CallError {
    fn from(err: io::Error) -> Self {
        CallError::Transport {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

/// Raised when a string is not a known precision tag.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown precision tag '{0}' (expected 'float' or 'double')")]
pub struct ParsePrecisionError(pub String);
