//! Result and error types for Fingertip.

use crate::event::FingerId;
use thiserror::Error;

/// Result type for gesture operations
pub type GestureResult<T> = Result<T, GestureError>;

/// Result type for device operations
pub type DeviceResult<T> = Result<T, DeviceError>;

/// Errors raised by a [`TouchDevice`](crate::TouchDevice) implementation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeviceError {
    /// `finger_down` for a finger that is already in contact
    #[error("Cannot press finger {finger}: it's already pressed")]
    AlreadyDown {
        /// Offending finger
        finger: FingerId,
    },

    /// `finger_move` or `finger_up` for a finger that is not in contact
    #[error("Finger {finger} is not pressed")]
    NotDown {
        /// Offending finger
        finger: FingerId,
    },

    /// Every contact slot of the device is in use
    #[error("All {max} touch slots are in use")]
    NoFreeSlot {
        /// Number of slots the device exposes
        max: usize,
    },

    /// Failure injected by a test double
    #[error("Injected failure at event #{index}")]
    Injected {
        /// 1-based index of the rejected event
        index: usize,
    },

    /// Backend-specific failure
    #[error("Touch backend error: {message}")]
    Backend {
        /// Error message
        message: String,
    },
}

impl DeviceError {
    /// Create a backend error
    #[must_use]
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}

/// Errors that can occur while synthesizing a gesture
#[derive(Debug, Error)]
pub enum GestureError {
    /// Malformed gesture parameters; nothing was sent to the device
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message
        message: String,
    },

    /// The device rejected an event; the gesture was aborted mid-flight
    #[error("Device error: {0}")]
    Device(#[from] DeviceError),

    /// Cancellation was observed at a step boundary
    #[error("Gesture cancelled after lifting {lifted} finger(s)")]
    Cancelled {
        /// Number of fingers lifted during cleanup
        lifted: usize,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

impl GestureError {
    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Whether the error happened before any event reached the device
    #[must_use]
    pub const fn is_side_effect_free(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. } | Self::Config { .. })
    }

    /// The underlying device error, if any
    #[must_use]
    pub const fn device_error(&self) -> Option<&DeviceError> {
        match self {
            Self::Device(err) => Some(err),
            _ => None,
        }
    }
}
