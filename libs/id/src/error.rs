//! Error types for encoded ID validation.

use thiserror::Error;

/// Errors that can occur when validating an encoded ID.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The input value was not a string.
    #[error("string required")]
    NotAString,

    /// The ID length (excluding the folder marker) is not a multiple of 16.
    #[error("invalid id length {length}, must be a multiple of {multiple_of}")]
    InvalidLength { length: usize, multiple_of: usize },

    /// The ID contains characters outside the hex alphabet.
    #[error("invalid characters in encoded id '{value}'")]
    InvalidCharacters { value: String },
}

impl IdError {
    /// Returns true if this error indicates a length violation.
    pub fn is_length_error(&self) -> bool {
        matches!(self, IdError::InvalidLength { .. })
    }

    /// Returns true if this error indicates non-hex characters.
    pub fn is_character_error(&self) -> bool {
        matches!(self, IdError::InvalidCharacters { .. })
    }
}
