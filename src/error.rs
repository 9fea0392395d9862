//! Error types for derivada operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Main error type for derivada operations.
///
/// Distinguishes failures to open a file (path included) from malformed
/// file content and from underlying stream errors.
///
/// # Examples
///
/// ```
/// use derivada::error::DerivadaError;
///
/// let err = DerivadaError::Format {
///     message: "header declares zero columns".to_string(),
/// };
/// assert!(err.to_string().contains("zero columns"));
/// ```
#[derive(Debug)]
pub enum DerivadaError {
    /// File could not be opened for reading or writing.
    Open {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Invalid or corrupt file content.
    Format {
        /// Error description
        message: String,
    },

    /// I/O error on an already-open stream.
    Io(io::Error),
}

impl fmt::Display for DerivadaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DerivadaError::Open { path, source } => {
                write!(f, "cannot open '{}': {source}", path.display())
            }
            DerivadaError::Format { message } => {
                write!(f, "invalid jacobian file: {message}")
            }
            DerivadaError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for DerivadaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DerivadaError::Open { source, .. } => Some(source),
            DerivadaError::Io(e) => Some(e),
            DerivadaError::Format { .. } => None,
        }
    }
}

impl From<io::Error> for DerivadaError {
    fn from(err: io::Error) -> Self {
        DerivadaError::Io(err)
    }
}

impl DerivadaError {
    /// Create a format error from anything displayable.
    #[must_use]
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format {
            message: message.into(),
        }
    }

    /// Create an open error carrying the offending path.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, DerivadaError>;
