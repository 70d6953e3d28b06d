//! Error types for the dotlist library
//!
//! Errors fall into two classes. Programmer errors (`InvalidArgument`) are
//! raised when an operation receives an argument of the wrong shape, such as a
//! non-integer index or an unknown callback name. Everything data-shaped, like
//! a missing path or an out-of-range index, is reported through `None` or a
//! caller supplied default and never through this type.

use std::fmt;
use thiserror::Error;

/// The main error type for all library operations
#[derive(Error, Debug)]
pub enum DotListError {
    /// An argument had the wrong type or shape for the operation
    #[error("Invalid argument passed to {operation}: {reason}")]
    InvalidArgument { operation: String, reason: String },

    /// `set` met a value that cannot hold the next segment: a scalar under
    /// the strict policy, or a sequence addressed by a non-index segment
    #[error("Path conflict at '{segment}' while setting '{path}'")]
    PathConflict { path: String, segment: String },

    /// Value type conversion errors
    #[error("Type conversion error: cannot convert {from} to {to}")]
    TypeConversion { from: String, to: String },

    /// YAML parsing or serialization errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Regular expression errors
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, DotListError>;

impl DotListError {
    /// Create a new invalid argument error
    pub fn invalid_argument(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Create a new path conflict error
    pub fn path_conflict(path: impl Into<String>, segment: impl Into<String>) -> Self {
        Self::PathConflict {
            path: path.into(),
            segment: segment.into(),
        }
    }

    /// Create a new type conversion error
    pub fn type_conversion(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::TypeConversion {
            from: from.into(),
            to: to.into(),
        }
    }

    /// True for errors caused by calling an operation with a bad argument
    pub fn is_programmer_error(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Get the severity level of this error. The binary turns it into its
    /// exit status.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Io(_) => ErrorSeverity::Critical,
            Self::InvalidArgument { .. } | Self::Yaml(_) | Self::Json(_) => ErrorSeverity::High,
            Self::PathConflict { .. } | Self::TypeConversion { .. } | Self::Regex(_) => {
                ErrorSeverity::Medium
            }
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Medium => write!(f, "MEDIUM"),
            Self::High => write!(f, "HIGH"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = DotListError::invalid_argument("Sequence::get", "expected an integer, got \"x\"");
        assert_eq!(
            err.to_string(),
            "Invalid argument passed to Sequence::get: expected an integer, got \"x\""
        );
        assert!(err.is_programmer_error());
        assert_eq!(err.severity(), ErrorSeverity::High);
    }

    #[test]
    fn test_path_conflict_is_data_error() {
        let err = DotListError::path_conflict("a.b.c", "b");
        assert!(!err.is_programmer_error());
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.to_string().contains("'b'"));
    }

    #[test]
    fn test_error_severity_ordering() {
        assert!(ErrorSeverity::Critical > ErrorSeverity::High);
        assert!(ErrorSeverity::High > ErrorSeverity::Medium);
        assert_eq!(ErrorSeverity::Critical.to_string(), "CRITICAL");
        let io = DotListError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.severity(), ErrorSeverity::Critical);
    }
}
