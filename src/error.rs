//! Error types for token loading, resolution and artifact generation.
//!
//! Every failure surfaces to the binary as a single human-readable message;
//! the variants only exist so library callers and tests can tell them apart.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while generating brand artifacts.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A required input file does not exist.
    #[error("Configuration file not found: {}", path.display())]
    ConfigMissing {
        /// Path that was looked up
        path: PathBuf,
    },

    /// A required field is absent, has the wrong shape, or holds an invalid value.
    #[error("Malformed configuration in {source_name}: {message}")]
    ConfigMalformed {
        /// Input (file name or logical section) the problem was found in
        source_name: String,
        /// What is wrong
        message: String,
    },

    /// A generated artifact could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl GenerateError {
    /// Creates a `ConfigMalformed` error.
    pub fn malformed(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigMalformed {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Returns true for `ConfigMissing`.
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::ConfigMissing { .. })
    }

    /// Returns true for `ConfigMalformed`.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::ConfigMalformed { .. })
    }
}

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, GenerateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_message_names_path() {
        let err = GenerateError::ConfigMissing {
            path: PathBuf::from("config/colors.json"),
        };
        assert!(err.is_missing());
        assert_eq!(
            err.to_string(),
            "Configuration file not found: config/colors.json"
        );
    }

    #[test]
    fn test_malformed_message() {
        let err = GenerateError::malformed("fonts.json", "missing field `sizes`");
        assert!(err.is_malformed());
        assert!(!err.is_missing());
        assert_eq!(
            err.to_string(),
            "Malformed configuration in fonts.json: missing field `sizes`"
        );
    }
}
