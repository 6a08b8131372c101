//! Gesture descriptions and their interpolated plans.
//!
//! [`GestureSpec`] and [`MultiFingerSpec`] describe what the caller asks for;
//! a [`GesturePlan`] is the derived, side-effect free list of per-step finger
//! positions. Frame `i` (0-based) places finger `k` at
//! `start[k] + (i + 1) * delta[k]`, computed from the start point rather than
//! accumulated, and the plan always ends with a corrective frame sitting
//! exactly on the end points.

use crate::config::{GestureConfig, DEFAULT_STEPS, DEFAULT_STEP_DELAY_MS};
use crate::event::{FingerId, TouchEvent};
use crate::geometry::Point;
use crate::result::{GestureError, GestureResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Two-finger pinch description, symmetric about `center`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureSpec {
    /// Fixed pivot of the gesture
    pub center: Point,
    /// Offset from center at the start; fingers start at `center ± vector_start`
    pub vector_start: Point,
    /// Offset from center at the end
    pub vector_end: Point,
    /// Interpolation steps
    pub steps: u32,
    /// Pause after each step
    pub step_delay: Duration,
}

impl GestureSpec {
    /// Pinch with the default pacing (100 steps, 5 ms apart)
    #[must_use]
    pub const fn new(center: Point, vector_start: Point, vector_end: Point) -> Self {
        Self {
            center,
            vector_start,
            vector_end,
            steps: DEFAULT_STEPS,
            step_delay: Duration::from_millis(DEFAULT_STEP_DELAY_MS),
        }
    }

    /// Pinch paced by `config`
    #[must_use]
    pub const fn from_config(
        center: Point,
        vector_start: Point,
        vector_end: Point,
        config: &GestureConfig,
    ) -> Self {
        Self {
            center,
            vector_start,
            vector_end,
            steps: config.steps,
            step_delay: config.step_delay(),
        }
    }

    /// Set interpolation steps
    #[must_use]
    pub const fn with_steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }

    /// Set the per-step delay
    #[must_use]
    pub const fn with_step_delay(mut self, delay: Duration) -> Self {
        self.step_delay = delay;
        self
    }

    /// Start points: finger 0 at `center - vector_start`, finger 1 at `center + vector_start`
    #[must_use]
    pub fn start_points(&self) -> [Point; 2] {
        [
            self.center - self.vector_start,
            self.center + self.vector_start,
        ]
    }

    /// End points, mirrored the same way
    #[must_use]
    pub fn end_points(&self) -> [Point; 2] {
        [self.center - self.vector_end, self.center + self.vector_end]
    }

    /// Whether the fingers move apart (zoom in)
    #[must_use]
    pub fn is_zoom_in(&self) -> bool {
        self.vector_end.length() > self.vector_start.length()
    }

    /// Compute the plan.
    ///
    /// Finger 1 moves by exactly the negated step of finger 0.
    pub fn plan(&self) -> GestureResult<GesturePlan> {
        validate_steps(self.steps)?;
        for (name, p) in [
            ("center", self.center),
            ("vector_start", self.vector_start),
            ("vector_end", self.vector_end),
        ] {
            if !p.is_finite() {
                return Err(GestureError::invalid_argument(format!(
                    "{name} must be finite, got {p}"
                )));
            }
        }

        let starts = self.start_points();
        let ends = self.end_points();
        let delta = (ends[0] - starts[0]) / f64::from(self.steps);
        GesturePlan::build(
            starts.to_vec(),
            ends.to_vec(),
            vec![delta, -delta],
            self.steps,
            self.step_delay,
        )
    }
}

/// N-finger linear gesture: finger `k` travels from `starts[k]` to `ends[k]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiFingerSpec {
    /// Start point per finger
    pub starts: Vec<Point>,
    /// End point per finger
    pub ends: Vec<Point>,
    /// Interpolation steps
    pub steps: u32,
    /// Pause after each step
    pub step_delay: Duration,
}

impl MultiFingerSpec {
    /// Gesture with the default pacing
    #[must_use]
    pub fn new(starts: impl Into<Vec<Point>>, ends: impl Into<Vec<Point>>) -> Self {
        Self {
            starts: starts.into(),
            ends: ends.into(),
            steps: DEFAULT_STEPS,
            step_delay: Duration::from_millis(DEFAULT_STEP_DELAY_MS),
        }
    }

    /// Set interpolation steps
    #[must_use]
    pub const fn with_steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }

    /// Set the per-step delay
    #[must_use]
    pub const fn with_step_delay(mut self, delay: Duration) -> Self {
        self.step_delay = delay;
        self
    }

    /// Compute the plan
    pub fn plan(&self) -> GestureResult<GesturePlan> {
        validate_steps(self.steps)?;
        if self.starts.is_empty() {
            return Err(GestureError::invalid_argument(
                "a gesture needs at least one finger",
            ));
        }
        finger_count(self.starts.len())?;
        if self.starts.len() != self.ends.len() {
            return Err(GestureError::invalid_argument(format!(
                "{} start points but {} end points",
                self.starts.len(),
                self.ends.len()
            )));
        }
        if let Some(p) = self
            .starts
            .iter()
            .chain(&self.ends)
            .find(|p| !p.is_finite())
        {
            return Err(GestureError::invalid_argument(format!(
                "gesture points must be finite, got {p}"
            )));
        }

        let steps = f64::from(self.steps);
        let deltas: Vec<Point> = self
            .starts
            .iter()
            .zip(&self.ends)
            .map(|(&s, &e)| (e - s) / steps)
            .collect();
        GesturePlan::build(
            self.starts.clone(),
            self.ends.clone(),
            deltas,
            self.steps,
            self.step_delay,
        )
    }
}

impl From<GestureSpec> for MultiFingerSpec {
    fn from(spec: GestureSpec) -> Self {
        Self {
            starts: spec.start_points().to_vec(),
            ends: spec.end_points().to_vec(),
            steps: spec.steps,
            step_delay: spec.step_delay,
        }
    }
}

fn validate_steps(steps: u32) -> GestureResult<()> {
    if steps == 0 {
        return Err(GestureError::invalid_argument("steps must be at least 1"));
    }
    Ok(())
}

/// Interpolated positions for every finger at every step.
///
/// Frames are computed on demand, so a plan holds only the per-finger start,
/// end and step delta regardless of how many steps it has.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GesturePlan {
    starts: Vec<Point>,
    ends: Vec<Point>,
    deltas: Vec<Point>,
    fingers: u32,
    steps: u32,
    step_delay: Duration,
}

impl GesturePlan {
    fn build(
        starts: Vec<Point>,
        ends: Vec<Point>,
        deltas: Vec<Point>,
        steps: u32,
        step_delay: Duration,
    ) -> GestureResult<Self> {
        let fingers = finger_count(starts.len())?;
        if let Some(d) = deltas.iter().find(|d| !d.is_finite()) {
            return Err(GestureError::invalid_argument(format!(
                "gesture span overflows, step delta {d}"
            )));
        }

        Ok(Self {
            starts,
            ends,
            deltas,
            fingers,
            steps,
            step_delay,
        })
    }

    /// Number of fingers
    #[must_use]
    pub fn finger_count(&self) -> usize {
        self.starts.len()
    }

    /// Finger ids in touch-down order
    pub fn fingers(&self) -> impl ExactSizeIterator<Item = FingerId> {
        (0..self.fingers).map(FingerId)
    }

    /// Number of interpolation steps
    #[must_use]
    pub const fn steps(&self) -> u32 {
        self.steps
    }

    /// Contact points at touch-down
    #[must_use]
    pub fn starts(&self) -> &[Point] {
        &self.starts
    }

    /// Exact final positions
    #[must_use]
    pub fn ends(&self) -> &[Point] {
        &self.ends
    }

    /// Finger positions after step `step` (0-based), in finger order
    pub fn frame(&self, step: u32) -> impl ExactSizeIterator<Item = Point> + '_ {
        let factor = f64::from(step) + 1.0;
        self.starts
            .iter()
            .zip(&self.deltas)
            .map(move |(&start, &delta)| start + delta * factor)
    }

    /// Interpolated frames, one per step, excluding the corrective frame
    pub fn frames(&self) -> impl ExactSizeIterator<Item = Vec<Point>> + '_ {
        (0..self.steps).map(move |step| self.frame(step).collect())
    }

    /// Pause after each step
    #[must_use]
    pub const fn step_delay(&self) -> Duration {
        self.step_delay
    }

    /// Total pacing time spent sleeping
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.step_delay.saturating_mul(self.steps)
    }

    /// Number of events executing the plan emits
    #[must_use]
    pub fn event_count(&self) -> u64 {
        u64::from(self.fingers) * (u64::from(self.steps) + 3)
    }

    /// The exact event sequence executing the plan emits.
    ///
    /// Materializes every event; use [`GesturePlan::frame`] to walk long
    /// gestures step by step.
    #[must_use]
    pub fn events(&self) -> Vec<TouchEvent> {
        let mut events = Vec::with_capacity(usize::try_from(self.event_count()).unwrap_or(0));
        events.extend(
            self.fingers()
                .zip(&self.starts)
                .map(|(finger, &p)| TouchEvent::down(finger, p)),
        );
        for step in 0..self.steps {
            events.extend(
                self.fingers()
                    .zip(self.frame(step))
                    .map(|(finger, p)| TouchEvent::moved(finger, p)),
            );
        }
        events.extend(
            self.fingers()
                .zip(&self.ends)
                .map(|(finger, &p)| TouchEvent::moved(finger, p)),
        );
        events.extend(self.fingers().map(TouchEvent::up));
        events
    }
}

fn finger_count(len: usize) -> GestureResult<u32> {
    u32::try_from(len).map_err(|_| {
        GestureError::invalid_argument(format!(
            "a gesture supports at most {} fingers, got {len}",
            u32::MAX
        ))
    })
}
