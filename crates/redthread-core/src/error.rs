//! Error types for the Red Thread invitation

use thiserror::Error;

/// Main error type for invitation operations
#[derive(Error, Debug)]
pub enum SiteError {
    /// Content file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Content file was not valid JSON for the content model
    #[error("Content error: {0}")]
    Content(#[from] serde_json::Error),

    /// RSVP submission endpoint is not configured
    #[error("No RSVP endpoint configured")]
    EndpointMissing,

    /// RSVP submission could not be dispatched
    #[error("Dispatch error: {0}")]
    Dispatch(String),
}

/// Result type alias using SiteError
pub type SiteResult<T> = Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SiteError::Dispatch("connection refused".to_string());
        assert_eq!(format!("{}", err), "Dispatch error: connection refused");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let site_err: SiteError = io_err.into();
        assert!(matches!(site_err, SiteError::Io(_)));
    }
}
