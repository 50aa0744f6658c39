//! Error types for awsutil-core
//!
//! Provides the unified error type shared by the resource clients,
//! the configuration store, and the SDK adapter crate.

use thiserror::Error;

/// Result type alias for awsutil-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for awsutil-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or empty required parameter, detected before any remote call
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Local path absent (file or directory)
    #[error("Not found: {0}")]
    NotFound(String),

    /// The remote API returned a fault, or an expected field was missing
    /// or unparseable in its response
    #[error("Remote API error: {0}")]
    Remote(String),

    /// Configuration read/write fault
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Local filesystem fault outside configuration persistence
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for errors raised by local validation, before any remote call
    pub const fn is_local(&self) -> bool {
        !matches!(self, Error::Remote(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidArgument("queue url is empty".into());
        assert_eq!(err.to_string(), "Invalid argument: queue url is empty");

        let err = Error::NotFound("/no/such/file".into());
        assert_eq!(err.to_string(), "Not found: /no/such/file");
    }

    #[test]
    fn test_is_local() {
        assert!(Error::InvalidArgument("x".into()).is_local());
        assert!(Error::NotFound("x".into()).is_local());
        assert!(!Error::Remote("x".into()).is_local());
    }
}
