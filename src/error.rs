//! Speech Assistant Error Types
//!
//! Centralized error handling for the library. The binary wraps these in
//! `anyhow` at the edge.

use thiserror::Error;

/// Central error type for the assistant
#[derive(Error, Debug)]
pub enum AssistError {
    /// Blank interactions never become conversation entries
    #[error("Refusing to record an empty {0} interaction")]
    EmptyInteraction(String),

    #[error("Lock poisoned: {0}")]
    Lock(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias for assistant operations
pub type AssistResult<T> = Result<T, AssistError>;

/// Helper to convert Mutex poison errors
impl<T> From<std::sync::PoisonError<T>> for AssistError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        AssistError::Lock(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: AssistError = io.into();
        assert!(matches!(err, AssistError::Io(_)));
        assert_eq!(err.to_string(), "read-only");
    }
}
