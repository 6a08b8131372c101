//! Touch event types emitted by gestures.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle for one contact point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FingerId(pub u32);

impl FingerId {
    /// Index-based id used by multi-finger gestures, `None` past `u32::MAX`
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        u32::try_from(index).ok().map(Self)
    }
}

impl fmt::Display for FingerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Phase of a touch event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TouchPhase {
    /// Finger made contact
    Down,
    /// Finger moved while in contact
    Move,
    /// Finger lifted
    Up,
}

/// A single low-level touch event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "lowercase")]
pub enum TouchEvent {
    /// Finger down at a point
    Down {
        /// Finger handle
        finger: FingerId,
        /// Contact point
        point: Point,
    },
    /// Finger moved to a point
    Move {
        /// Finger handle
        finger: FingerId,
        /// New position
        point: Point,
    },
    /// Finger lifted
    Up {
        /// Finger handle
        finger: FingerId,
    },
}

impl TouchEvent {
    /// Create a down event
    #[must_use]
    pub const fn down(finger: FingerId, point: Point) -> Self {
        Self::Down { finger, point }
    }

    /// Create a move event
    #[must_use]
    pub const fn moved(finger: FingerId, point: Point) -> Self {
        Self::Move { finger, point }
    }

    /// Create an up event
    #[must_use]
    pub const fn up(finger: FingerId) -> Self {
        Self::Up { finger }
    }

    /// The finger this event targets
    #[must_use]
    pub const fn finger(&self) -> FingerId {
        match self {
            Self::Down { finger, .. } | Self::Move { finger, .. } | Self::Up { finger } => *finger,
        }
    }

    /// The event phase
    #[must_use]
    pub const fn phase(&self) -> TouchPhase {
        match self {
            Self::Down { .. } => TouchPhase::Down,
            Self::Move { .. } => TouchPhase::Move,
            Self::Up { .. } => TouchPhase::Up,
        }
    }

    /// Position carried by the event; `None` for lifts
    #[must_use]
    pub const fn point(&self) -> Option<Point> {
        match self {
            Self::Down { point, .. } | Self::Move { point, .. } => Some(*point),
            Self::Up { .. } => None,
        }
    }
}

impl fmt::Display for TouchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Down { finger, point } => write!(f, "down  #{finger} {point}"),
            Self::Move { finger, point } => write!(f, "move  #{finger} {point}"),
            Self::Up { finger } => write!(f, "up    #{finger}"),
        }
    }
}
