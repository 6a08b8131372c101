//! Fingertip: Synthetic Multi-Touch Gestures for UI Testing
//!
//! Scripted touch interactions for driving a system under test: a gesture is
//! described by its endpoints, interpolated into discrete steps, and replayed
//! through an injected [`TouchDevice`] with pacing from an injected
//! [`TimeSource`].
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   plan()   ┌──────────────┐  execute()  ┌──────────────┐
//! │ GestureSpec  │──────────►│ GesturePlan  │────────────►│ TouchDevice  │
//! │ MultiFinger  │           │ (pure data)  │      │      │ (injected)   │
//! └──────────────┘           └──────────────┘      │      └──────────────┘
//!                                                  ▼
//!                                           ┌──────────────┐
//!                                           │ TimeSource   │
//!                                           │ CancelToken  │
//!                                           └──────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use fingertip::{pinch, FakeClock, FingerId, GestureSpec, Point, RecordingDevice};
//!
//! let mut device = RecordingDevice::new();
//! let clock = FakeClock::new();
//! let spec = GestureSpec::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(50.0, 0.0))
//!     .with_steps(4);
//!
//! pinch(&mut device, &clock, &spec).unwrap();
//!
//! let xs: Vec<f64> = device.path_of(FingerId(0)).iter().map(|p| p.x).collect();
//! assert_eq!(xs, [-10.0, -20.0, -30.0, -40.0, -50.0, -50.0]);
//! ```

#![warn(missing_docs)]

mod cancel;
mod clock;
mod config;
mod device;
mod engine;
mod event;
mod geometry;
mod plan;
mod result;
mod touchscreen;

/// Recording test double for touch devices
pub mod mock;

pub use cancel::CancelToken;
pub use clock::{FakeClock, SystemClock, TimeSource};
pub use config::{
    GestureConfig, DEFAULT_DRAG_STEPS, DEFAULT_DRAG_STEP_DELAY_MS, DEFAULT_STEPS,
    DEFAULT_STEP_DELAY_MS, DEFAULT_TAP_HOLD_MS,
};
pub use device::{SharedDevice, TouchDevice};
pub use engine::{execute, multi_finger_gesture, pinch, tap, GestureEngine};
pub use event::{FingerId, TouchEvent, TouchPhase};
pub use geometry::Point;
pub use mock::RecordingDevice;
pub use plan::{GesturePlan, GestureSpec, MultiFingerSpec};
pub use result::{DeviceError, DeviceResult, GestureError, GestureResult};
pub use touchscreen::{Contact, Resolution, VirtualTouchscreen, DEFAULT_MAX_FINGERS};

/// Prelude for convenient imports
pub mod prelude {
    pub use super::{
        CancelToken, FakeClock, FingerId, GestureConfig, GestureEngine, GestureError,
        GestureResult, GestureSpec, MultiFingerSpec, Point, SystemClock, TimeSource, TouchDevice,
        TouchEvent, VirtualTouchscreen,
    };
}
