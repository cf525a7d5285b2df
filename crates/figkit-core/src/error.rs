//! Error handling for FigKit.
//!
//! Interactive editing never fails: invalid input degrades to a default and
//! is logged by the caller. These types cover the surfaces that do return
//! `Result`: persistence, file I/O, and code emission.

use thiserror::Error;

/// Main error type for FigKit.
#[derive(Error, Debug)]
pub enum Error {
    /// The persisted layout blob could not be produced or understood.
    #[error("Persistence error: {reason}")]
    Persistence {
        /// Description of the persistence failure.
        reason: String,
    },

    /// Code emission failed.
    #[error("Code generation error: {reason}")]
    Codegen {
        /// Description of the emission failure.
        reason: String,
    },

    /// Standard I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message.
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }
}

/// Result type using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
