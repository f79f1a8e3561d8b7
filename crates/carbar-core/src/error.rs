//! Error types for CarBar Core

use thiserror::Error;

/// Result type alias for shell operations
pub type Result<T> = std::result::Result<T, Error>;

/// Shell error types
#[derive(Error, Debug)]
pub enum Error {
    // Display probe errors
    #[error("Display probe failed: {0}")]
    DisplayProbe(String),

    #[error("Display probe reported non-positive metrics: {width}x{height}")]
    InvalidMetrics { width: i32, height: i32 },

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Returns true if this error is recoverable
    ///
    /// Probe errors are recoverable: detection substitutes the fallback
    /// resolution and the shell keeps starting. Configuration errors are not.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::DisplayProbe(_) | Error::InvalidMetrics { .. })
    }

    /// Returns the error code for logs
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::DisplayProbe(_) => "DISPLAY_PROBE",
            Error::InvalidMetrics { .. } => "INVALID_METRICS",
            Error::InvalidConfig(_) => "INVALID_CONFIG",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_errors_are_recoverable() {
        assert!(Error::DisplayProbe("no display".to_string()).is_recoverable());
        assert!(Error::InvalidMetrics { width: 0, height: 0 }.is_recoverable());
        assert!(!Error::InvalidConfig("bad url".to_string()).is_recoverable());
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            Error::InvalidMetrics { width: -1, height: 768 }.error_code(),
            "INVALID_METRICS"
        );
        assert_eq!(
            Error::DisplayProbe("x".to_string()).error_code(),
            "DISPLAY_PROBE"
        );
    }

    #[test]
    fn test_error_messages() {
        let err = Error::InvalidMetrics { width: 0, height: 1080 };
        assert_eq!(
            err.to_string(),
            "Display probe reported non-positive metrics: 0x1080"
        );
    }
}
