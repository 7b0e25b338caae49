//! Error types shared across the crate.

use thiserror::Error;

/// A port could not supply randomness or time.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{source_name}: {message}")]
pub struct EntropyError {
    /// Name of the port that failed (e.g. "entropy", "clock").
    pub source_name: String,
    /// Human-readable failure reason.
    pub message: String,
}

impl EntropyError {
    /// Creates an error for the named port.
    pub fn new(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self { source_name: source_name.into(), message: message.into() }
    }
}

/// Failure of a single identifier generation call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerateError {
    /// The randomness or time source could not be read.
    #[error("entropy unavailable ({0})")]
    EntropyUnavailable(#[from] EntropyError),
}

/// Reasons a string is not a well-formed identifier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseIdentifierError {
    /// The input has the wrong number of bytes.
    #[error("expected {expected} characters, found {found}")]
    Length {
        /// Required length.
        expected: usize,
        /// Actual length.
        found: usize,
    },
    /// A character is outside the alphabet or a hyphen is misplaced.
    #[error("invalid character {found:?} at position {position}")]
    Character {
        /// Zero-based byte offset.
        position: usize,
        /// The offending character.
        found: char,
    },
}

/// Configuration read from the environment is invalid.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `KEYMINT_LAYOUT` (or `--layout`) named an unknown layout.
    #[error("unknown layout {0:?} (expected \"random\" or \"timestamped\")")]
    UnknownLayout(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entropy_unavailable_message_names_the_port() {
        let err = GenerateError::from(EntropyError::new("entropy", "device not ready"));
        assert_eq!(err.to_string(), "entropy unavailable (entropy: device not ready)");
    }
}
