//! Gesture pacing configuration.
//!
//! Loaded from YAML (`fingertip.yaml`) or JSON; any field left out keeps its
//! default.
//!
//! ```yaml
//! steps: 100
//! step_delay_ms: 5
//! drag_steps: 100
//! drag_step_delay_ms: 2
//! tap_hold_ms: 100
//! max_fingers: 9
//! ```

use crate::result::{GestureError, GestureResult};
use crate::touchscreen::DEFAULT_MAX_FINGERS;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default interpolation steps for multi-finger gestures
pub const DEFAULT_STEPS: u32 = 100;
/// Default delay between multi-finger steps
pub const DEFAULT_STEP_DELAY_MS: u64 = 5;
/// Default interpolation steps for a drag
pub const DEFAULT_DRAG_STEPS: u32 = 100;
/// Default delay between drag steps
pub const DEFAULT_DRAG_STEP_DELAY_MS: u64 = 2;
/// Default contact time for a tap
pub const DEFAULT_TAP_HOLD_MS: u64 = 100;

/// Pacing and device defaults for gestures
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GestureConfig {
    /// Interpolation steps for pinch and multi-finger gestures
    pub steps: u32,
    /// Delay between steps, in milliseconds
    pub step_delay_ms: u64,
    /// Interpolation steps for drags
    pub drag_steps: u32,
    /// Delay between drag steps, in milliseconds
    pub drag_step_delay_ms: u64,
    /// How long a tap stays in contact, in milliseconds
    pub tap_hold_ms: u64,
    /// Contact slots on the virtual touchscreen
    pub max_fingers: usize,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
            step_delay_ms: DEFAULT_STEP_DELAY_MS,
            drag_steps: DEFAULT_DRAG_STEPS,
            drag_step_delay_ms: DEFAULT_DRAG_STEP_DELAY_MS,
            tap_hold_ms: DEFAULT_TAP_HOLD_MS,
            max_fingers: DEFAULT_MAX_FINGERS,
        }
    }
}

impl GestureConfig {
    /// Create default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate YAML
    pub fn from_yaml(yaml: &str) -> GestureResult<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate JSON
    pub fn from_json(json: &str) -> GestureResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file; `.json` is parsed as JSON, anything else as YAML
    pub fn load(path: impl AsRef<Path>) -> GestureResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        tracing::debug!(path = %path.display(), "loading gesture config");
        if is_json {
            Self::from_json(&text)
        } else {
            Self::from_yaml(&text)
        }
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> GestureResult<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Reject values the engine cannot run with
    pub fn validate(&self) -> GestureResult<()> {
        if self.steps == 0 {
            return Err(GestureError::config("steps must be at least 1"));
        }
        if self.drag_steps == 0 {
            return Err(GestureError::config("drag_steps must be at least 1"));
        }
        if self.max_fingers == 0 {
            return Err(GestureError::config("max_fingers must be at least 1"));
        }
        Ok(())
    }

    /// Set interpolation steps
    #[must_use]
    pub const fn with_steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }

    /// Set the per-step delay
    #[must_use]
    pub const fn with_step_delay_ms(mut self, ms: u64) -> Self {
        self.step_delay_ms = ms;
        self
    }

    /// Set drag steps
    #[must_use]
    pub const fn with_drag_steps(mut self, steps: u32) -> Self {
        self.drag_steps = steps;
        self
    }

    /// Set the per-step drag delay
    #[must_use]
    pub const fn with_drag_step_delay_ms(mut self, ms: u64) -> Self {
        self.drag_step_delay_ms = ms;
        self
    }

    /// Set the tap contact time
    #[must_use]
    pub const fn with_tap_hold_ms(mut self, ms: u64) -> Self {
        self.tap_hold_ms = ms;
        self
    }

    /// Set the number of contact slots
    #[must_use]
    pub const fn with_max_fingers(mut self, max: usize) -> Self {
        self.max_fingers = max;
        self
    }

    /// Per-step delay as a [`Duration`]
    #[must_use]
    pub const fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }

    /// Per-step drag delay as a [`Duration`]
    #[must_use]
    pub const fn drag_step_delay(&self) -> Duration {
        Duration::from_millis(self.drag_step_delay_ms)
    }

    /// Tap contact time as a [`Duration`]
    #[must_use]
    pub const fn tap_hold(&self) -> Duration {
        Duration::from_millis(self.tap_hold_ms)
    }
}
