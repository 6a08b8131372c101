//! Touch injection interface consumed by the gesture engine.
//!
//! A [`TouchDevice`] accepts the three primitives every multi-touch backend
//! understands. Implementations own the finger-ID namespace and must reject
//! lifecycle violations (double down, move or lift of a finger that is not in
//! contact) with a [`DeviceError`].

use crate::event::{FingerId, TouchEvent};
use crate::geometry::Point;
use crate::result::{DeviceError, DeviceResult};
use std::sync::{Arc, Mutex, MutexGuard};

/// Low-level multi-touch injection
pub trait TouchDevice {
    /// Put `finger` in contact at `point`
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::AlreadyDown`] if the finger is already in contact.
    fn finger_down(&mut self, finger: FingerId, point: Point) -> DeviceResult<()>;

    /// Move an in-contact `finger` to `point`
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::NotDown`] if the finger is not in contact.
    fn finger_move(&mut self, finger: FingerId, point: Point) -> DeviceResult<()>;

    /// Lift `finger`
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::NotDown`] if the finger is not in contact.
    fn finger_up(&mut self, finger: FingerId) -> DeviceResult<()>;

    /// Dispatch a recorded event to the matching primitive
    fn dispatch(&mut self, event: TouchEvent) -> DeviceResult<()> {
        match event {
            TouchEvent::Down { finger, point } => self.finger_down(finger, point),
            TouchEvent::Move { finger, point } => self.finger_move(finger, point),
            TouchEvent::Up { finger } => self.finger_up(finger),
        }
    }
}

impl<T: TouchDevice + ?Sized> TouchDevice for &mut T {
    fn finger_down(&mut self, finger: FingerId, point: Point) -> DeviceResult<()> {
        (**self).finger_down(finger, point)
    }

    fn finger_move(&mut self, finger: FingerId, point: Point) -> DeviceResult<()> {
        (**self).finger_move(finger, point)
    }

    fn finger_up(&mut self, finger: FingerId) -> DeviceResult<()> {
        (**self).finger_up(finger)
    }
}

impl<T: TouchDevice + ?Sized> TouchDevice for Box<T> {
    fn finger_down(&mut self, finger: FingerId, point: Point) -> DeviceResult<()> {
        (**self).finger_down(finger, point)
    }

    fn finger_move(&mut self, finger: FingerId, point: Point) -> DeviceResult<()> {
        (**self).finger_move(finger, point)
    }

    fn finger_up(&mut self, finger: FingerId) -> DeviceResult<()> {
        (**self).finger_up(finger)
    }
}

impl<T: TouchDevice + ?Sized> TouchDevice for MutexGuard<'_, T> {
    fn finger_down(&mut self, finger: FingerId, point: Point) -> DeviceResult<()> {
        (**self).finger_down(finger, point)
    }

    fn finger_move(&mut self, finger: FingerId, point: Point) -> DeviceResult<()> {
        (**self).finger_move(finger, point)
    }

    fn finger_up(&mut self, finger: FingerId) -> DeviceResult<()> {
        (**self).finger_up(finger)
    }
}

/// Device handle that can be shared across threads.
///
/// Gestures must not interleave on one device, so callers take the lock once
/// and run the whole gesture against the guard:
///
/// ```
/// use fingertip::{FakeClock, GestureSpec, Point, SharedDevice, VirtualTouchscreen};
///
/// let shared = SharedDevice::new(VirtualTouchscreen::new());
/// let clock = FakeClock::new();
/// let spec = GestureSpec::new(
///     Point::new(100.0, 100.0),
///     Point::new(10.0, 0.0),
///     Point::new(40.0, 0.0),
/// );
///
/// let mut device = shared.lock().unwrap();
/// fingertip::pinch(&mut device, &clock, &spec).unwrap();
/// assert_eq!(device.active_count(), 0);
/// ```
#[derive(Debug, Default)]
pub struct SharedDevice<D> {
    inner: Arc<Mutex<D>>,
}

impl<D> SharedDevice<D> {
    /// Wrap a device
    #[must_use]
    pub fn new(device: D) -> Self {
        Self {
            inner: Arc::new(Mutex::new(device)),
        }
    }

    /// Acquire exclusive access for the duration of a gesture
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::Backend`] if a previous holder panicked.
    pub fn lock(&self) -> DeviceResult<MutexGuard<'_, D>> {
        self.inner
            .lock()
            .map_err(|_| DeviceError::backend("touch device lock poisoned"))
    }
}

impl<D> Clone for SharedDevice<D> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
