//! Deck tuning knobs.

use serde::{Deserialize, Serialize};

use crate::threshold::{
    DECISION_THRESHOLD, INDICATOR_THRESHOLD, ROTATION_PER_UNIT, SCALE_STEP, STACK_DEPTH,
    Y_OFFSET_STEP,
};

/// Configuration for a [`DeckEngine`](crate::DeckEngine).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeckConfig {
    /// Horizontal travel that commits a decision. Must be exceeded, not met.
    pub decision_threshold: f64,

    /// Horizontal travel at which the NOPE / LIKE stamp appears.
    pub indicator_threshold: f64,

    /// Degrees of rotation per unit of `dx`.
    pub rotation_per_unit: f64,

    /// Travel over which the front card fades to `min_opacity`.
    pub fade_distance: f64,

    /// Lowest opacity the dragged card reaches.
    pub min_opacity: f64,

    /// Maximum number of layers in [`visible_stack`](crate::DeckEngine::visible_stack).
    pub stack_depth: usize,

    /// Scale lost per layer.
    pub scale_step: f64,

    /// Vertical offset per layer.
    pub y_offset_step: f64,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            decision_threshold: DECISION_THRESHOLD,
            indicator_threshold: INDICATOR_THRESHOLD,
            rotation_per_unit: ROTATION_PER_UNIT,
            fade_distance: DECISION_THRESHOLD * 4.0,
            min_opacity: 0.5,
            stack_depth: STACK_DEPTH,
            scale_step: SCALE_STEP,
            y_offset_step: Y_OFFSET_STEP,
        }
    }
}

impl DeckConfig {
    /// Set the decision threshold.
    ///
    /// Non-finite or non-positive values are ignored so the deck keeps a
    /// usable threshold.
    #[must_use]
    pub fn with_decision_threshold(mut self, threshold: f64) -> Self {
        if threshold.is_finite() && threshold > 0.0 {
            self.decision_threshold = threshold;
        }
        self
    }

    /// Set the indicator threshold.
    #[must_use]
    pub fn with_indicator_threshold(mut self, threshold: f64) -> Self {
        if threshold.is_finite() && threshold >= 0.0 {
            self.indicator_threshold = threshold;
        }
        self
    }

    /// Set the number of rendered layers (at least one).
    #[must_use]
    pub fn with_stack_depth(mut self, depth: usize) -> Self {
        self.stack_depth = depth.max(1);
        self
    }
}
