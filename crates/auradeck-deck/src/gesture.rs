//! In-progress drag gestures.

use serde::{Deserialize, Serialize};

/// A pointer position in screen units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerPos {
    pub x: f64,
    pub y: f64,
}

impl PointerPos {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for PointerPos {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// A drag on the front card, alive from pointer-down to release or cancel.
///
/// The engine holds `Some(GestureState)` exactly while a gesture is active.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureState {
    origin: PointerPos,
    current: PointerPos,
}

impl GestureState {
    pub fn start(origin: PointerPos) -> Self {
        Self { origin, current: origin }
    }

    pub fn origin(&self) -> PointerPos {
        self.origin
    }

    pub fn current(&self) -> PointerPos {
        self.current
    }

    pub(crate) fn move_to(&mut self, pos: PointerPos) {
        self.current = pos;
    }

    /// Horizontal displacement since pointer-down.
    pub fn dx(&self) -> f64 {
        self.current.x - self.origin.x
    }

    /// Vertical displacement. Tracked for rendering only; never decides.
    pub fn dy(&self) -> f64 {
        self.current.y - self.origin.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displacement_is_relative_to_origin() {
        let mut g = GestureState::start(PointerPos::new(200.0, 300.0));
        assert_eq!(g.dx(), 0.0);
        g.move_to(PointerPos::new(80.0, 340.0));
        assert_eq!(g.dx(), -120.0);
        assert_eq!(g.dy(), 40.0);
        assert_eq!(g.origin(), PointerPos::new(200.0, 300.0));
    }

    #[test]
    fn finiteness() {
        assert!(PointerPos::new(1.0, 2.0).is_finite());
        assert!(!PointerPos::new(f64::NAN, 2.0).is_finite());
        assert!(!PointerPos::from((0.0, f64::INFINITY)).is_finite());
    }
}
