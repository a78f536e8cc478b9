//! Unified error types for snapcheck

use thiserror::Error;

/// Unified error type for all snapcheck operations
#[derive(Error, Debug)]
pub enum SnapError {
    // Browser errors
    #[error("Browser error: {0}")]
    Browser(String),

    #[error("Navigation failed: {0}")]
    Navigation(String),

    #[error("Page not loaded: {0}")]
    PageNotLoaded(String),

    #[error("Screenshot failed: {0}")]
    Screenshot(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // Generic
    #[error("{0}")]
    Other(String),
}

/// Result type alias using SnapError
pub type Result<T> = std::result::Result<T, SnapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_operation() {
        let err = SnapError::Navigation("http://localhost:3000/missing".to_string());
        assert!(err.to_string().starts_with("Navigation failed"));

        let err = SnapError::Screenshot("CDP capture failed".to_string());
        assert!(err.to_string().starts_with("Screenshot failed"));

        let err = SnapError::PageNotLoaded("network never went idle".to_string());
        assert!(err.to_string().starts_with("Page not loaded"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: SnapError = io.into();
        assert!(matches!(err, SnapError::Io(_)));
    }
}
