//! Error types for the unpost library.

use std::io;
use thiserror::Error;

/// Result type alias for unpost operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during document conversion.
///
/// Missing or mistyped node attributes are never errors; they fall back to
/// defaults during decoding. Only input that cannot be decoded into the
/// node tree shape is reported.
#[derive(Error, Debug)]
pub enum Error {
    /// The input is not a well-formed document tree.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// I/O error while reading input.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error during rendering.
    #[error("Render error: {0}")]
    Render(String),
}

impl Error {
    /// Returns `true` if the input could not be decoded.
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode(_))
    }
}
