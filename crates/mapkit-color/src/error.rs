//! Error types for color operations.
//!
//! Color strings come from style documents and user configuration, so the
//! only failure mode of this crate is a string that looks like a color but
//! cannot be decoded.

use thiserror::Error;

/// Color operation error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// A color string could not be parsed by the color model.
    #[error("cannot parse color '{value}': {reason}")]
    Parse {
        /// The offending string, verbatim.
        value: String,
        /// Parser message.
        reason: String,
    },
}

impl ColorError {
    /// Creates a [`ColorError::Parse`] error.
    #[inline]
    pub fn parse(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Returns the string that failed to parse.
    #[inline]
    pub fn value(&self) -> &str {
        match self {
            Self::Parse { value, .. } => value,
        }
    }
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;
