//! In-memory multi-touch panel.
//!
//! Models a type-B multi-touch device: each contact claims one of a fixed
//! number of slots and receives a fresh tracking id when it goes down. The
//! slot is returned to the arena when the contact lifts. Gesture code only
//! ever sees [`FingerId`]s; the slot and tracking id are this device's own
//! bookkeeping.

use crate::device::TouchDevice;
use crate::event::{FingerId, TouchEvent};
use crate::geometry::Point;
use crate::result::{DeviceError, DeviceResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default number of contact slots
pub const DEFAULT_MAX_FINGERS: usize = 9;

/// One finger currently in contact with the panel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// Caller-facing finger handle
    pub finger: FingerId,
    /// Slot claimed from the arena
    pub slot: usize,
    /// Tracking id assigned on contact
    pub tracking_id: u64,
    /// Current position
    pub point: Point,
}

/// Panel resolution; positions are clamped into `[0, width] x [0, height]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    /// Width in pixels
    pub width: f64,
    /// Height in pixels
    pub height: f64,
}

impl Resolution {
    /// Create a resolution
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    fn clamp(self, p: Point) -> Point {
        Point::new(p.x.clamp(0.0, self.width), p.y.clamp(0.0, self.height))
    }
}

/// Virtual touchscreen with a slot arena
#[derive(Debug, Clone)]
pub struct VirtualTouchscreen {
    slots: Vec<Option<FingerId>>,
    contacts: BTreeMap<FingerId, Contact>,
    last_tracking_id: u64,
    resolution: Option<Resolution>,
    log: Vec<TouchEvent>,
}

impl VirtualTouchscreen {
    /// Create a panel with [`DEFAULT_MAX_FINGERS`] slots and no bounds
    #[must_use]
    pub fn new() -> Self {
        Self::with_max_fingers(DEFAULT_MAX_FINGERS)
    }

    /// Create a panel with `max` slots
    #[must_use]
    pub fn with_max_fingers(max: usize) -> Self {
        Self {
            slots: vec![None; max],
            contacts: BTreeMap::new(),
            last_tracking_id: 0,
            resolution: None,
            log: Vec::new(),
        }
    }

    /// Clamp reported positions to a resolution
    #[must_use]
    pub fn with_resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = Some(resolution);
        self
    }

    /// Number of slots
    #[must_use]
    pub fn max_fingers(&self) -> usize {
        self.slots.len()
    }

    /// Whether `finger` is in contact
    #[must_use]
    pub fn is_down(&self, finger: FingerId) -> bool {
        self.contacts.contains_key(&finger)
    }

    /// Number of fingers in contact
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.contacts.len()
    }

    /// Snapshot of all contacts, ordered by finger id
    #[must_use]
    pub fn contacts(&self) -> Vec<Contact> {
        self.contacts.values().copied().collect()
    }

    /// Contact for `finger`, if in contact
    #[must_use]
    pub fn contact(&self, finger: FingerId) -> Option<&Contact> {
        self.contacts.get(&finger)
    }

    /// Every accepted event, in order
    #[must_use]
    pub fn events(&self) -> &[TouchEvent] {
        &self.log
    }

    /// Take the event log, leaving it empty
    pub fn drain_events(&mut self) -> Vec<TouchEvent> {
        std::mem::take(&mut self.log)
    }

    fn position(&self, p: Point) -> Point {
        self.resolution.map_or(p, |r| r.clamp(p))
    }

    fn claim_slot(&mut self, finger: FingerId) -> DeviceResult<usize> {
        let slot = self
            .slots
            .iter()
            .position(Option::is_none)
            .ok_or(DeviceError::NoFreeSlot {
                max: self.slots.len(),
            })?;
        self.slots[slot] = Some(finger);
        Ok(slot)
    }

    fn next_tracking_id(&mut self) -> u64 {
        self.last_tracking_id += 1;
        self.last_tracking_id
    }
}

impl Default for VirtualTouchscreen {
    fn default() -> Self {
        Self::new()
    }
}

impl TouchDevice for VirtualTouchscreen {
    fn finger_down(&mut self, finger: FingerId, point: Point) -> DeviceResult<()> {
        if self.is_down(finger) {
            return Err(DeviceError::AlreadyDown { finger });
        }
        let slot = self.claim_slot(finger)?;
        let tracking_id = self.next_tracking_id();
        let point = self.position(point);
        self.contacts.insert(
            finger,
            Contact {
                finger,
                slot,
                tracking_id,
                point,
            },
        );
        tracing::trace!(%finger, slot, tracking_id, x = point.x, y = point.y, "contact down");
        self.log.push(TouchEvent::down(finger, point));
        Ok(())
    }

    fn finger_move(&mut self, finger: FingerId, point: Point) -> DeviceResult<()> {
        let point = self.position(point);
        let contact = self
            .contacts
            .get_mut(&finger)
            .ok_or(DeviceError::NotDown { finger })?;
        contact.point = point;
        self.log.push(TouchEvent::moved(finger, point));
        Ok(())
    }

    fn finger_up(&mut self, finger: FingerId) -> DeviceResult<()> {
        let contact = self
            .contacts
            .remove(&finger)
            .ok_or(DeviceError::NotDown { finger })?;
        self.slots[contact.slot] = None;
        tracing::trace!(%finger, slot = contact.slot, "contact up");
        self.log.push(TouchEvent::up(finger));
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    // =========================================================================
    // Slot arena
    // =========================================================================

    #[test]
    fn test_slots_are_claimed_lowest_first_and_reused() {
        let mut ts = VirtualTouchscreen::new();
        ts.finger_down(FingerId(7), Point::ORIGIN).unwrap();
        ts.finger_down(FingerId(3), Point::ORIGIN).unwrap();
        assert_eq!(ts.contact(FingerId(7)).unwrap().slot, 0);
        assert_eq!(ts.contact(FingerId(3)).unwrap().slot, 1);

        ts.finger_up(FingerId(7)).unwrap();
        ts.finger_down(FingerId(9), Point::ORIGIN).unwrap();
        assert_eq!(ts.contact(FingerId(9)).unwrap().slot, 0);
    }

    #[test]
    fn test_tracking_ids_increase_per_contact() {
        let mut ts = VirtualTouchscreen::new();
        ts.finger_down(FingerId(0), Point::ORIGIN).unwrap();
        let first = ts.contact(FingerId(0)).unwrap().tracking_id;
        ts.finger_up(FingerId(0)).unwrap();
        ts.finger_down(FingerId(0), Point::ORIGIN).unwrap();
        let second = ts.contact(FingerId(0)).unwrap().tracking_id;
        assert!(second > first);
    }

    #[test]
    fn test_tenth_contact_is_rejected() {
        let mut ts = VirtualTouchscreen::new();
        for i in 0..9 {
            ts.finger_down(FingerId(i), Point::ORIGIN).unwrap();
        }
        assert_eq!(
            ts.finger_down(FingerId(9), Point::ORIGIN),
            Err(DeviceError::NoFreeSlot { max: 9 })
        );
        assert_eq!(ts.active_count(), 9);
        assert!(!ts.is_down(FingerId(9)));
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    #[test]
    fn test_double_down_is_rejected() {
        let mut ts = VirtualTouchscreen::new();
        ts.finger_down(FingerId(0), Point::ORIGIN).unwrap();
        assert_eq!(
            ts.finger_down(FingerId(0), Point::new(1.0, 1.0)),
            Err(DeviceError::AlreadyDown {
                finger: FingerId(0)
            })
        );
        assert_eq!(ts.contact(FingerId(0)).unwrap().point, Point::ORIGIN);
    }

    #[test]
    fn test_move_and_up_require_contact() {
        let mut ts = VirtualTouchscreen::new();
        assert_eq!(
            ts.finger_move(FingerId(0), Point::ORIGIN),
            Err(DeviceError::NotDown {
                finger: FingerId(0)
            })
        );
        assert_eq!(
            ts.finger_up(FingerId(0)),
            Err(DeviceError::NotDown {
                finger: FingerId(0)
            })
        );
        assert!(ts.events().is_empty());
    }

    #[test]
    fn test_move_updates_contact_position() {
        let mut ts = VirtualTouchscreen::new();
        ts.finger_down(FingerId(0), Point::new(1.0, 2.0)).unwrap();
        ts.finger_move(FingerId(0), Point::new(3.0, 4.0)).unwrap();
        assert_eq!(ts.contacts()[0].point, Point::new(3.0, 4.0));
        assert_eq!(ts.drain_events().len(), 2);
        assert!(ts.events().is_empty());
    }

    #[test]
    fn test_resolution_clamps_positions() {
        let mut ts = VirtualTouchscreen::with_max_fingers(2)
            .with_resolution(Resolution::new(1080.0, 1920.0));
        ts.finger_down(FingerId(0), Point::new(-5.0, 2000.0)).unwrap();
        assert_eq!(
            ts.contact(FingerId(0)).unwrap().point,
            Point::new(0.0, 1920.0)
        );
        assert_eq!(ts.max_fingers(), 2);
    }
}
