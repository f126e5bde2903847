//! Render hints derived from the gesture.
//!
//! Nothing here is stored in the engine. Every value is a pure function of
//! the current `dx` and the layer depth, recomputed on demand.

use auradeck_persona::Candidate;
use serde::{Deserialize, Serialize};

use crate::config::DeckConfig;
use crate::threshold::indicator_visible;

/// The stamp shown on a card being dragged past the indicator threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Indicator {
    /// Dragging left.
    Nope,
    /// Dragging right.
    Like,
}

impl Indicator {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Nope => "NOPE",
            Self::Like => "LIKE",
        }
    }
}

/// How the front card should be drawn for a given displacement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwipeVisual {
    pub offset_x: f64,
    pub rotation_deg: f64,
    pub opacity: f64,
    pub indicator: Option<Indicator>,
    /// 0.0 at the indicator threshold, 1.0 at the decision threshold.
    pub indicator_strength: f64,
}

impl SwipeVisual {
    /// A card at rest.
    pub const REST: Self = Self {
        offset_x: 0.0,
        rotation_deg: 0.0,
        opacity: 1.0,
        indicator: None,
        indicator_strength: 0.0,
    };

    /// Compute the visual for a horizontal displacement.
    pub fn for_dx(dx: f64, config: &DeckConfig) -> Self {
        if !dx.is_finite() {
            return Self::REST;
        }
        let magnitude = dx.abs();

        let indicator = if indicator_visible(dx, config.indicator_threshold) {
            Some(if dx > 0.0 { Indicator::Like } else { Indicator::Nope })
        } else {
            None
        };

        let ramp = config.decision_threshold - config.indicator_threshold;
        let indicator_strength = match indicator {
            None => 0.0,
            Some(_) if ramp <= 0.0 => 1.0,
            Some(_) => ((magnitude - config.indicator_threshold) / ramp).clamp(0.0, 1.0),
        };

        let opacity = if config.fade_distance > 0.0 {
            (1.0 - magnitude / config.fade_distance).max(config.min_opacity)
        } else {
            1.0
        };

        Self {
            offset_x: dx,
            rotation_deg: dx * config.rotation_per_unit,
            opacity,
            indicator,
            indicator_strength,
        }
    }
}

impl Default for SwipeVisual {
    fn default() -> Self {
        Self::REST
    }
}

/// One rendered layer of the card stack. Depth 0 is the front card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardLayer<'a> {
    pub candidate: &'a Candidate,
    pub depth: usize,
    pub scale: f64,
    pub y_offset: f64,
    /// Higher draws on top.
    pub z_index: usize,
    pub interactive: bool,
    pub visual: SwipeVisual,
}

/// Static placement of a layer: `(scale, y_offset)`.
pub fn layer_placement(depth: usize, config: &DeckConfig) -> (f64, f64) {
    let d = depth as f64;
    (1.0 - d * config.scale_step, d * config.y_offset_step)
}
