//! Error types for the CLI

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Gesture, configuration or config-file failure
    #[error(transparent)]
    Gesture(#[from] fingertip::GestureError),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use fingertip::GestureError;

    #[test]
    fn test_gesture_error_is_transparent() {
        let err: CliError = GestureError::invalid_argument("steps must be at least 1").into();
        assert_eq!(err.to_string(), "Invalid argument: steps must be at least 1");
    }

    #[test]
    fn test_config_failure_arrives_as_gesture_error() {
        let err: CliError = GestureError::config("max_fingers must be at least 1").into();
        assert!(matches!(
            err,
            CliError::Gesture(GestureError::Config { .. })
        ));
    }
}
