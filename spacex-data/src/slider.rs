//! Payload range slider configuration.

use serde::{Deserialize, Serialize};

/// Lowest selectable payload (kg).
pub const PAYLOAD_SLIDER_MIN: f64 = 0.0;
/// Highest selectable payload (kg).
pub const PAYLOAD_SLIDER_MAX: f64 = 10000.0;
/// Slider step (kg).
pub const PAYLOAD_SLIDER_STEP: f64 = 1000.0;
/// Labelled tick marks under the slider.
pub const PAYLOAD_SLIDER_MARKS: [f64; 5] = [0.0, 2500.0, 5000.0, 7500.0, 10000.0];

/// A selected payload interval in kilograms, always `low <= high`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    /// Build a range, swapping the bounds if they arrive reversed.
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// The full slider span, used before the data bounds are known.
    pub fn slider_span() -> Self {
        Self::new(PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_MAX)
    }

    /// The range as the slider handles can show it: `low` rounded down and
    /// `high` rounded up to a multiple of [`PAYLOAD_SLIDER_STEP`], both kept
    /// inside the slider bounds.
    pub fn snapped_to_step(self) -> Self {
        let snap = |v: f64, round: fn(f64) -> f64| {
            let stepped = round((v - PAYLOAD_SLIDER_MIN) / PAYLOAD_SLIDER_STEP) * PAYLOAD_SLIDER_STEP
                + PAYLOAD_SLIDER_MIN;
            stepped.clamp(PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_MAX)
        };
        Self::new(snap(self.low, f64::floor), snap(self.high, f64::ceil))
    }

    /// Move the low handle; it may not pass the high one.
    pub fn with_low(self, low: f64) -> Self {
        Self {
            low: low.min(self.high),
            high: self.high,
        }
    }

    /// Move the high handle; it may not pass the low one.
    pub fn with_high(self, high: f64) -> Self {
        Self {
            low: self.low,
            high: high.max(self.low),
        }
    }
}

impl Default for PayloadRange {
    fn default() -> Self {
        Self::slider_span()
    }
}
