//! Runs gestures against a virtual touchscreen and collects the trace.

use crate::commands::{DragArgs, PacingArgs, PinchArgs, TapArgs};
use crate::error::CliResult;
use fingertip::{
    FakeClock, GestureConfig, GestureEngine, GestureSpec, MultiFingerSpec, TouchEvent,
    VirtualTouchscreen,
};
use serde::Serialize;
use std::time::Duration;

/// Outcome of one previewed gesture
#[derive(Debug, Clone, Serialize)]
pub struct GestureReport {
    /// Gesture name
    pub gesture: &'static str,
    /// Accepted events, in order
    pub events: Vec<TouchEvent>,
    /// Sleeps requested by the engine
    pub sleeps: u64,
    /// Virtual time spent pacing, in milliseconds
    pub virtual_ms: f64,
}

/// Gesture runner bound to one configuration
#[derive(Debug, Clone)]
pub struct GestureRunner {
    config: GestureConfig,
}

impl GestureRunner {
    /// Create a runner
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self { config }
    }

    fn engine(&self) -> GestureEngine<VirtualTouchscreen, FakeClock> {
        let device = VirtualTouchscreen::with_max_fingers(self.config.max_fingers);
        GestureEngine::new(device, FakeClock::new()).with_config(self.config.clone())
    }

    fn pacing(&self, pacing: &PacingArgs) -> (u32, Duration) {
        (
            pacing.steps.unwrap_or(self.config.steps),
            pacing
                .delay_ms
                .map_or(self.config.step_delay(), Duration::from_millis),
        )
    }

    /// Preview a pinch
    pub fn pinch(&self, args: &PinchArgs) -> CliResult<GestureReport> {
        let (steps, delay) = self.pacing(&args.pacing);
        let spec = GestureSpec::new(args.center, args.from, args.to)
            .with_steps(steps)
            .with_step_delay(delay);
        let mut engine = self.engine();
        engine.pinch_with(&spec)?;
        Ok(report("pinch", engine))
    }

    /// Preview a drag
    pub fn drag(&self, args: &DragArgs) -> CliResult<GestureReport> {
        let steps = args.pacing.steps.unwrap_or(self.config.drag_steps);
        let delay = args
            .pacing
            .delay_ms
            .map_or(self.config.drag_step_delay(), Duration::from_millis);
        let spec = MultiFingerSpec::new([args.from], [args.to])
            .with_steps(steps)
            .with_step_delay(delay);
        let mut engine = self.engine();
        engine.gesture_with(&spec)?;
        Ok(report("drag", engine))
    }

    /// Preview a tap
    pub fn tap(&self, args: &TapArgs) -> CliResult<GestureReport> {
        let mut config = self.config.clone();
        if let Some(ms) = args.hold_ms {
            config.tap_hold_ms = ms;
        }
        let mut engine = self.engine().with_config(config);
        engine.tap(args.at)?;
        Ok(report("tap", engine))
    }
}

fn report(
    gesture: &'static str,
    engine: GestureEngine<VirtualTouchscreen, FakeClock>,
) -> GestureReport {
    let (mut device, clock) = engine.into_parts();
    GestureReport {
        gesture,
        events: device.drain_events(),
        sleeps: clock.sleep_count(),
        virtual_ms: clock.now().as_secs_f64() * 1000.0,
    }
}
