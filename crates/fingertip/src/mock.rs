//! Recording test double for [`TouchDevice`].
//!
//! Records every accepted event in order, enforces the finger lifecycle, and
//! can be told to reject the n-th event to exercise abort paths.

use crate::device::TouchDevice;
use crate::event::{FingerId, TouchEvent, TouchPhase};
use crate::geometry::Point;
use crate::result::{DeviceError, DeviceResult, GestureResult};
use std::collections::BTreeSet;
use std::path::Path;

/// Device that records events instead of injecting them
#[derive(Debug, Clone, Default)]
pub struct RecordingDevice {
    events: Vec<TouchEvent>,
    down: BTreeSet<FingerId>,
    fail_at: Option<usize>,
    attempts: usize,
}

impl RecordingDevice {
    /// Create an empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject the `n`-th event (1-based) with [`DeviceError::Injected`]
    #[must_use]
    pub fn fail_at(mut self, n: usize) -> Self {
        self.fail_at = Some(n);
        self
    }

    /// Recorded events in emission order
    #[must_use]
    pub fn events(&self) -> &[TouchEvent] {
        &self.events
    }

    /// Number of recorded events
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether nothing was recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of calls made, including rejected ones
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Fingers currently in contact
    #[must_use]
    pub fn down_fingers(&self) -> Vec<FingerId> {
        self.down.iter().copied().collect()
    }

    /// Successive positions reported for one finger (down then moves)
    #[must_use]
    pub fn path_of(&self, finger: FingerId) -> Vec<Point> {
        self.events
            .iter()
            .filter(|e| e.finger() == finger)
            .filter_map(TouchEvent::point)
            .collect()
    }

    /// Move positions only, for one finger
    #[must_use]
    pub fn moves_of(&self, finger: FingerId) -> Vec<Point> {
        self.events
            .iter()
            .filter(|e| e.finger() == finger && e.phase() == TouchPhase::Move)
            .filter_map(TouchEvent::point)
            .collect()
    }

    /// Drop recorded events and contact state
    pub fn clear(&mut self) {
        self.events.clear();
        self.down.clear();
        self.attempts = 0;
    }

    /// Serialize the recorded trace as pretty JSON
    pub fn to_json(&self) -> GestureResult<String> {
        Ok(serde_json::to_string_pretty(&self.events)?)
    }

    /// Write the recorded trace as JSON to `path`
    pub fn save_json(&self, path: impl AsRef<Path>) -> GestureResult<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    fn accept(&mut self, event: TouchEvent) -> DeviceResult<()> {
        self.attempts += 1;
        if self.fail_at == Some(self.attempts) {
            return Err(DeviceError::Injected {
                index: self.attempts,
            });
        }

        let finger = event.finger();
        match event.phase() {
            TouchPhase::Down => {
                if !self.down.insert(finger) {
                    return Err(DeviceError::AlreadyDown { finger });
                }
            }
            TouchPhase::Move => {
                if !self.down.contains(&finger) {
                    return Err(DeviceError::NotDown { finger });
                }
            }
            TouchPhase::Up => {
                if !self.down.remove(&finger) {
                    return Err(DeviceError::NotDown { finger });
                }
            }
        }
        self.events.push(event);
        Ok(())
    }
}

impl TouchDevice for RecordingDevice {
    fn finger_down(&mut self, finger: FingerId, point: Point) -> DeviceResult<()> {
        self.accept(TouchEvent::down(finger, point))
    }

    fn finger_move(&mut self, finger: FingerId, point: Point) -> DeviceResult<()> {
        self.accept(TouchEvent::moved(finger, point))
    }

    fn finger_up(&mut self, finger: FingerId) -> DeviceResult<()> {
        self.accept(TouchEvent::up(finger))
    }
}
