//! Gesture execution.
//!
//! Drives a [`GesturePlan`] through a [`TouchDevice`], pacing steps with a
//! [`TimeSource`]. For `n` fingers and `s` steps the emitted sequence is
//! always:
//!
//! ```text
//! down(0) .. down(n-1)
//! { move(0) .. move(n-1), sleep } x s
//! move(0) .. move(n-1)          (corrective, exactly on the end points)
//! up(0) .. up(n-1)
//! ```
//!
//! Device errors abort the sequence and are returned unchanged; nothing is
//! retried or rolled back, so fingers that were down stay down. Cancellation
//! is observed after each sleep and lifts every finger before returning.

use crate::cancel::CancelToken;
use crate::clock::{SystemClock, TimeSource};
use crate::config::GestureConfig;
use crate::device::TouchDevice;
use crate::event::FingerId;
use crate::geometry::Point;
use crate::plan::{GesturePlan, GestureSpec, MultiFingerSpec};
use crate::result::{GestureError, GestureResult};
use std::time::Duration;
use tracing::{debug, warn};

/// Two-finger pinch about `spec.center`
///
/// # Errors
///
/// [`GestureError::InvalidArgument`] before any event if `spec.steps` is 0;
/// [`GestureError::Device`] as soon as the device rejects an event.
pub fn pinch<D, C>(device: &mut D, clock: &C, spec: &GestureSpec) -> GestureResult<()>
where
    D: TouchDevice + ?Sized,
    C: TimeSource + ?Sized,
{
    execute(device, clock, &spec.plan()?, None)
}

/// Linear N-finger gesture; finger `k` is driven through `FingerId(k)`
pub fn multi_finger_gesture<D, C>(
    device: &mut D,
    clock: &C,
    spec: &MultiFingerSpec,
) -> GestureResult<()>
where
    D: TouchDevice + ?Sized,
    C: TimeSource + ?Sized,
{
    execute(device, clock, &spec.plan()?, None)
}

/// Drive a precomputed plan
pub fn execute<D, C>(
    device: &mut D,
    clock: &C,
    plan: &GesturePlan,
    cancel: Option<&CancelToken>,
) -> GestureResult<()>
where
    D: TouchDevice + ?Sized,
    C: TimeSource + ?Sized,
{
    if cancel.is_some_and(CancelToken::is_cancelled) {
        return Err(GestureError::Cancelled { lifted: 0 });
    }

    let fingers: Vec<FingerId> = plan.fingers().collect();
    debug!(
        fingers = fingers.len(),
        steps = plan.steps(),
        step_delay_us = plan.step_delay().as_micros() as u64,
        "gesture start"
    );

    for (&finger, &point) in fingers.iter().zip(plan.starts()) {
        device.finger_down(finger, point)?;
    }

    for step in 0..plan.steps() {
        for (&finger, point) in fingers.iter().zip(plan.frame(step)) {
            device.finger_move(finger, point)?;
        }
        clock.sleep(plan.step_delay());
        if cancel.is_some_and(CancelToken::is_cancelled) {
            return Err(lift_all(device, &fingers));
        }
    }

    for (&finger, &point) in fingers.iter().zip(plan.ends()) {
        device.finger_move(finger, point)?;
    }
    for &finger in &fingers {
        device.finger_up(finger)?;
    }

    debug!(events = plan.event_count(), "gesture complete");
    Ok(())
}

/// Touch `at` for `hold`, then lift
pub fn tap<D, C>(
    device: &mut D,
    clock: &C,
    at: Point,
    hold: Duration,
    cancel: Option<&CancelToken>,
) -> GestureResult<()>
where
    D: TouchDevice + ?Sized,
    C: TimeSource + ?Sized,
{
    if !at.is_finite() {
        return Err(GestureError::invalid_argument(format!(
            "tap point must be finite, got {at}"
        )));
    }
    if cancel.is_some_and(CancelToken::is_cancelled) {
        return Err(GestureError::Cancelled { lifted: 0 });
    }

    let finger = FingerId(0);
    debug!(x = at.x, y = at.y, "tap");
    device.finger_down(finger, at)?;
    clock.sleep(hold);
    if cancel.is_some_and(CancelToken::is_cancelled) {
        return Err(lift_all(device, &[finger]));
    }
    device.finger_up(finger)?;
    Ok(())
}

/// Best-effort release after cancellation
fn lift_all<D>(device: &mut D, fingers: &[FingerId]) -> GestureError
where
    D: TouchDevice + ?Sized,
{
    let mut lifted = 0;
    for &finger in fingers {
        match device.finger_up(finger) {
            Ok(()) => lifted += 1,
            Err(err) => warn!(%finger, error = %err, "failed to lift finger after cancellation"),
        }
    }
    debug!(lifted, "gesture cancelled");
    GestureError::Cancelled { lifted }
}

/// Device, clock and pacing bundled together.
///
/// ```
/// use fingertip::{FakeClock, GestureEngine, Point, VirtualTouchscreen};
///
/// let mut engine = GestureEngine::new(VirtualTouchscreen::new(), FakeClock::new());
/// engine
///     .pinch(Point::new(540.0, 960.0), Point::new(50.0, 0.0), Point::new(200.0, 0.0))
///     .unwrap();
///
/// assert_eq!(engine.device().events().len(), 2 + 2 * 100 + 2 + 2);
/// assert_eq!(engine.clock().sleep_count(), 100);
/// ```
#[derive(Debug)]
pub struct GestureEngine<D, C = SystemClock> {
    device: D,
    clock: C,
    config: GestureConfig,
    cancel: Option<CancelToken>,
}

impl<D: TouchDevice> GestureEngine<D, SystemClock> {
    /// Engine pacing with real sleeps
    #[must_use]
    pub fn with_system_clock(device: D) -> Self {
        Self::new(device, SystemClock)
    }
}

impl<D: TouchDevice, C: TimeSource> GestureEngine<D, C> {
    /// Create an engine with default pacing
    #[must_use]
    pub fn new(device: D, clock: C) -> Self {
        Self {
            device,
            clock,
            config: GestureConfig::default(),
            cancel: None,
        }
    }

    /// Replace the pacing configuration
    #[must_use]
    pub fn with_config(mut self, config: GestureConfig) -> Self {
        self.config = config;
        self
    }

    /// Observe `token` at every step boundary
    #[must_use]
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Pacing configuration
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// The driven device
    #[must_use]
    pub fn device(&self) -> &D {
        &self.device
    }

    /// The driven device, mutably
    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    /// The time source
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Take the device and clock back
    pub fn into_parts(self) -> (D, C) {
        (self.device, self.clock)
    }

    /// Pinch paced by the engine configuration
    pub fn pinch(
        &mut self,
        center: Point,
        vector_start: Point,
        vector_end: Point,
    ) -> GestureResult<()> {
        let spec = GestureSpec::from_config(center, vector_start, vector_end, &self.config);
        self.pinch_with(&spec)
    }

    /// Pinch with explicit pacing
    pub fn pinch_with(&mut self, spec: &GestureSpec) -> GestureResult<()> {
        self.execute(&spec.plan()?)
    }

    /// N-finger gesture paced by the engine configuration
    pub fn multi_finger_gesture(&mut self, starts: &[Point], ends: &[Point]) -> GestureResult<()> {
        let spec = MultiFingerSpec::new(starts, ends)
            .with_steps(self.config.steps)
            .with_step_delay(self.config.step_delay());
        self.gesture_with(&spec)
    }

    /// N-finger gesture with explicit pacing
    pub fn gesture_with(&mut self, spec: &MultiFingerSpec) -> GestureResult<()> {
        self.execute(&spec.plan()?)
    }

    /// One-finger drag from `from` to `to`, ending exactly on `to`
    pub fn drag(&mut self, from: Point, to: Point) -> GestureResult<()> {
        let spec = MultiFingerSpec::new([from], [to])
            .with_steps(self.config.drag_steps)
            .with_step_delay(self.config.drag_step_delay());
        debug!(%from, %to, "drag");
        self.gesture_with(&spec)
    }

    /// Tap at `at`, holding for the configured time
    pub fn tap(&mut self, at: Point) -> GestureResult<()> {
        tap(
            &mut self.device,
            &self.clock,
            at,
            self.config.tap_hold(),
            self.cancel.as_ref(),
        )
    }

    /// Drive a precomputed plan
    pub fn execute(&mut self, plan: &GesturePlan) -> GestureResult<()> {
        execute(&mut self.device, &self.clock, plan, self.cancel.as_ref())
    }
}
