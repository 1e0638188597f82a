//! Error types for Vortex
//!
//! Every engine operation reports failure through [`Error`]. There are
//! exactly three kinds, and none of them leave the in-memory index in a
//! partially-updated state:
//!
//! | Kind | Raised by | Effect on state |
//! |------|-----------|-----------------|
//! | InvalidInput | `add_document` | none |
//! | Io | `save`, `load` | none |
//! | CorruptIndex | `load` | none (prior index preserved) |

use thiserror::Error;

/// All Vortex errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed text encoding or an out-of-range document id
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Index file could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Index file has an unknown version or a truncated/inconsistent body
    #[error("corrupt index: {0}")]
    CorruptIndex(String),
}

/// Result type for Vortex operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Discriminant of [`Error`], for callers that branch on the kind only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// See [`Error::InvalidInput`]
    InvalidInput,
    /// See [`Error::Io`]
    Io,
    /// See [`Error::CorruptIndex`]
    CorruptIndex,
}

impl Error {
    /// The kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidInput(_) => ErrorKind::InvalidInput,
            Error::Io(_) => ErrorKind::Io,
            Error::CorruptIndex(_) => ErrorKind::CorruptIndex,
        }
    }

    /// Check if this is an invalid-input error.
    ///
    /// The caller may retry with corrected input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput(_))
    }

    /// Check if this is an I/O error.
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io(_))
    }

    /// Check if this is a corrupt-index error.
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Error::CorruptIndex(_))
    }
}
