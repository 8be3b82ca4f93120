//! Error types for the link resolver.
//!
//! All errors in the system are represented by the [`Error`] enum.
//! Classification never fails; only collaborators and configuration do.

use std::io;
use std::path::PathBuf;
use thiserror::Error as ThisError;

/// The core error type for all linkwiki operations.
#[derive(ThisError, Debug)]
pub enum Error {
    /// File system error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid configuration
    #[error("Configuration error: {reason}")]
    ConfigError { reason: String },

    /// Settings file could not be read or written as YAML
    #[error("Serialization error in {path}: {reason}")]
    SerializationError { path: PathBuf, reason: String },

    /// The page lookup collaborator failed. Distinct from a page that does not exist.
    #[error("Page lookup failed for slug '{slug}': {source}")]
    LookupError {
        slug: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an IO error
    pub fn io(err: io::Error) -> Self {
        Error::Io(err)
    }

    /// Create a configuration error
    pub fn config_error(reason: impl Into<String>) -> Self {
        Error::ConfigError {
            reason: reason.into(),
        }
    }

    /// Create a serialization error for a settings file
    pub fn serialization_error(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Error::SerializationError {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Wrap a failure raised by a page lookup backend
    pub fn lookup_error(
        slug: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::LookupError {
            slug: slug.into(),
            source: source.into(),
        }
    }

    /// True when this error came from the page lookup layer
    pub fn is_lookup_failure(&self) -> bool {
        matches!(self, Error::LookupError { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = Error::config_error("wiki base path cannot be empty");
        assert!(err.to_string().contains("Configuration error"));
        assert!(!err.is_lookup_failure());
    }

    #[test]
    fn test_lookup_error_keeps_source() {
        let cause = io::Error::new(io::ErrorKind::ConnectionReset, "index offline");
        let err = Error::lookup_error("foo-page", cause);

        assert!(err.is_lookup_failure());
        assert!(err.to_string().contains("foo-page"));
        assert!(err.to_string().contains("index offline"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_lookup_error_from_message() {
        let err = Error::lookup_error("bar", "timed out");
        assert_eq!(
            err.to_string(),
            "Page lookup failed for slug 'bar': timed out"
        );
    }
}
