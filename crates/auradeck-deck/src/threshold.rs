//! Swipe thresholds.
//!
//! A gesture is judged only by its horizontal displacement `dx` at release:
//! - `dx > DECISION_THRESHOLD` → accept
//! - `dx < -DECISION_THRESHOLD` → reject
//! - anything in between springs back
//!
//! The comparison is strict, so a release at exactly ±100 is abandoned.

use crate::decision::SwipeOutcome;

/// Horizontal travel needed to commit a decision.
pub const DECISION_THRESHOLD: f64 = 100.0;

/// Horizontal travel at which the NOPE / LIKE stamp appears.
pub const INDICATOR_THRESHOLD: f64 = 50.0;

/// Card rotation in degrees per unit of horizontal travel.
pub const ROTATION_PER_UNIT: f64 = 0.08;

/// Number of cards rendered in the stack.
pub const STACK_DEPTH: usize = 3;

/// Scale lost per layer below the front card.
pub const SCALE_STEP: f64 = 0.04;

/// Vertical offset added per layer below the front card.
pub const Y_OFFSET_STEP: f64 = 8.0;

/// Classify a release displacement against a threshold.
///
/// # Examples
///
/// ```
/// use auradeck_deck::{classify, SwipeOutcome, DECISION_THRESHOLD};
///
/// assert_eq!(classify(150.0, DECISION_THRESHOLD), Some(SwipeOutcome::Accept));
/// assert_eq!(classify(-101.0, DECISION_THRESHOLD), Some(SwipeOutcome::Reject));
/// assert_eq!(classify(100.0, DECISION_THRESHOLD), None);
/// ```
pub fn classify(dx: f64, threshold: f64) -> Option<SwipeOutcome> {
    if dx > threshold {
        Some(SwipeOutcome::Accept)
    } else if dx < -threshold {
        Some(SwipeOutcome::Reject)
    } else {
        None
    }
}

/// Whether the NOPE / LIKE stamp is visible for this displacement.
pub fn indicator_visible(dx: f64, threshold: f64) -> bool {
    dx.abs() > threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_exclusive() {
        assert_eq!(classify(DECISION_THRESHOLD, DECISION_THRESHOLD), None);
        assert_eq!(classify(-DECISION_THRESHOLD, DECISION_THRESHOLD), None);
        assert_eq!(classify(100.5, DECISION_THRESHOLD), Some(SwipeOutcome::Accept));
        assert_eq!(classify(-100.5, DECISION_THRESHOLD), Some(SwipeOutcome::Reject));
    }

    #[test]
    fn small_moves_abandon() {
        for dx in [-99.0, -50.0, 0.0, 42.0, 99.9] {
            assert_eq!(classify(dx, DECISION_THRESHOLD), None, "dx = {dx}");
        }
    }

    #[test]
    fn indicator_appears_before_decision() {
        assert!(INDICATOR_THRESHOLD < DECISION_THRESHOLD);
        assert!(!indicator_visible(50.0, INDICATOR_THRESHOLD));
        assert!(indicator_visible(-51.0, INDICATOR_THRESHOLD));
    }
}
