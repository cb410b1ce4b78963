//! # Error Handling
//!
//! Crate-wide error type and `Result` alias. The scanner surfaces an explicit
//! taxonomy for base-path failures so callers can decide whether to abort or
//! continue; everything else converts into this type via `From` or the
//! `new`/`with_source` constructors.

use std::path::PathBuf;
use std::sync::PoisonError;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The scan base path does not exist.
    #[error("path not found: {}", .0.display())]
    PathNotFound(PathBuf),

    /// The scan base path exists but is not a directory.
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// The process lacks read access to the scan base path.
    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("{0}")]
    Message(String),

    #[error("{context}")]
    Context {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The global configuration lock was poisoned by a panicking thread.
    #[error("configuration lock poisoned")]
    ConfigLock,
}

impl Error {
    /// Creates a new error with a plain message.
    pub fn new(message: &str) -> Self {
        Error::Message(message.to_string())
    }

    /// Creates a new error wrapping an underlying source error.
    pub fn with_source(context: &str, source: Box<dyn std::error::Error + Send + Sync>) -> Self {
        Error::Context {
            context: context.to_string(),
            source,
        }
    }
}

impl<T> From<PoisonError<T>> for Error {
    fn from(_: PoisonError<T>) -> Self {
        Error::ConfigLock
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_error_messages() {
        let err = Error::PathNotFound(PathBuf::from("/no/such/dir"));
        assert_eq!(err.to_string(), "path not found: /no/such/dir");

        let err = Error::NotADirectory(PathBuf::from("notes.txt"));
        assert_eq!(err.to_string(), "not a directory: notes.txt");

        let err = Error::PermissionDenied(PathBuf::from("/root/secret"));
        assert_eq!(err.to_string(), "permission denied: /root/secret");
    }

    #[test]
    fn test_with_source_preserves_chain() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        let err = Error::with_source("reading entry", Box::new(io));
        assert_eq!(err.to_string(), "reading entry");
        assert!(std::error::Error::source(&err).is_some());
    }
}
