//! The deck engine: an ordered queue of candidates and a gesture state machine.
//!
//! ```text
//!            begin_gesture            update_gesture
//!   Idle ───────────────────▶ Dragging ◀──────────┐
//!    ▲                          │  └──────────────┘
//!    │  cancel / |dx| ≤ 100     │ end_gesture, |dx| > 100
//!    └──────────────────────────┤
//!                               ▼
//!                   emit SwipeDecision, drop front, Idle
//! ```
//!
//! Every operation is total. Calls that make no sense in the current state
//! (a gesture on an empty deck, a second pointer-down mid-drag, an update
//! without a gesture) are no-ops.

use std::collections::{HashSet, VecDeque};

use auradeck_persona::Candidate;
use tracing::{debug, trace};

use crate::config::DeckConfig;
use crate::decision::{SwipeDecision, SwipeDirection, SwipeOutcome};
use crate::error::Result;
use crate::gesture::{GestureState, PointerPos};
use crate::source::CandidateSource;
use crate::threshold::classify;
use crate::visual::{layer_placement, CardLayer, SwipeVisual};

/// Swipe deck over a fixed list of candidates.
#[derive(Debug, Clone)]
pub struct DeckEngine {
    config: DeckConfig,
    /// Ordering as loaded, restored by [`reset`](Self::reset).
    original: Vec<Candidate>,
    deck: VecDeque<Candidate>,
    gesture: Option<GestureState>,
    decided: usize,
}

impl DeckEngine {
    /// Create a deck with the default thresholds.
    ///
    /// Duplicate candidate ids are dropped; the first occurrence wins.
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self::with_config(candidates, DeckConfig::default())
    }

    /// Create a deck with custom thresholds.
    pub fn with_config(candidates: Vec<Candidate>, config: DeckConfig) -> Self {
        let mut seen = HashSet::with_capacity(candidates.len());
        let original: Vec<Candidate> = candidates
            .into_iter()
            .filter(|c| seen.insert(c.id.clone()))
            .collect();

        debug!(candidates = original.len(), "Deck loaded");

        Self {
            config,
            deck: original.iter().cloned().collect(),
            original,
            gesture: None,
            decided: 0,
        }
    }

    /// Fetch candidates from a source and build a deck over them.
    pub async fn load<S>(source: &S, config: DeckConfig) -> Result<Self>
    where
        S: CandidateSource + ?Sized,
    {
        let candidates = source.fetch_candidates().await?;
        Ok(Self::with_config(candidates, config))
    }

    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    /// Number of candidates left.
    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    /// The interactive card, if any.
    pub fn front(&self) -> Option<&Candidate> {
        self.deck.front()
    }

    /// Remaining candidates in display order.
    pub fn candidates(&self) -> impl Iterator<Item = &Candidate> {
        self.deck.iter()
    }

    /// Candidates as originally loaded.
    pub fn original(&self) -> &[Candidate] {
        &self.original
    }

    pub fn gesture(&self) -> Option<&GestureState> {
        self.gesture.as_ref()
    }

    pub fn is_gesture_active(&self) -> bool {
        self.gesture.is_some()
    }

    /// Decisions emitted since load or the last reset.
    pub fn decided_count(&self) -> usize {
        self.decided
    }

    /// Pointer down on the front card.
    ///
    /// Ignored on an empty deck, for non-finite coordinates, and while a
    /// gesture is already active: a second pointer-down keeps the first
    /// origin and the travel so far.
    pub fn begin_gesture(&mut self, pos: impl Into<PointerPos>) {
        let pos = pos.into();
        if self.deck.is_empty() || !pos.is_finite() || self.gesture.is_some() {
            return;
        }
        self.gesture = Some(GestureState::start(pos));
    }

    /// Pointer moved. Only horizontal travel matters for the decision.
    pub fn update_gesture(&mut self, pos: impl Into<PointerPos>) {
        let pos = pos.into();
        if !pos.is_finite() {
            return;
        }
        if let Some(gesture) = self.gesture.as_mut() {
            gesture.move_to(pos);
            trace!(dx = gesture.dx(), "Gesture moved");
        }
    }

    /// Pointer released.
    ///
    /// Returns the decision if the drag passed the threshold; otherwise the
    /// card springs back and `None` is returned. The gesture ends either way.
    pub fn end_gesture(&mut self) -> Option<SwipeDecision> {
        let gesture = self.gesture.take()?;
        let dx = gesture.dx();
        match classify(dx, self.config.decision_threshold) {
            Some(outcome) => self.emit(outcome),
            None => {
                debug!(dx, "Gesture abandoned");
                None
            }
        }
    }

    /// Drop the gesture without a decision (pointer lost, window blur).
    pub fn cancel_gesture(&mut self) {
        if self.gesture.take().is_some() {
            debug!("Gesture cancelled");
        }
    }

    /// Decide on the front card without a drag (button controls).
    pub fn decide(&mut self, direction: SwipeDirection) -> Option<SwipeDecision> {
        self.gesture = None;
        self.emit(direction.outcome())
    }

    /// Restore the original candidate list and clear any gesture.
    pub fn reset(&mut self) {
        self.deck = self.original.iter().cloned().collect();
        self.gesture = None;
        self.decided = 0;
        debug!(candidates = self.deck.len(), "Deck reset");
    }

    /// Render hints for the front card under the current gesture.
    pub fn front_visual(&self) -> SwipeVisual {
        match &self.gesture {
            Some(g) => SwipeVisual::for_dx(g.dx(), &self.config),
            None => SwipeVisual::REST,
        }
    }

    /// Up to `stack_depth` layers, front card first.
    pub fn visible_stack(&self) -> Vec<CardLayer<'_>> {
        let shown = self.deck.len().min(self.config.stack_depth);
        self.deck
            .iter()
            .take(shown)
            .enumerate()
            .map(|(depth, candidate)| {
                let (scale, y_offset) = layer_placement(depth, &self.config);
                let front = depth == 0;
                CardLayer {
                    candidate,
                    depth,
                    scale,
                    y_offset,
                    z_index: shown - depth,
                    interactive: front,
                    visual: if front { self.front_visual() } else { SwipeVisual::REST },
                }
            })
            .collect()
    }

    fn emit(&mut self, outcome: SwipeOutcome) -> Option<SwipeDecision> {
        let candidate = self.deck.pop_front()?;
        self.decided += 1;
        debug!(
            candidate = %candidate.id,
            name = candidate.name(),
            %outcome,
            remaining = self.deck.len(),
            "Swipe decision"
        );
        Some(SwipeDecision {
            candidate_id: candidate.id,
            outcome,
        })
    }
}
