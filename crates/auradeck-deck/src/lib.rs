//! Auradeck Swipe Deck
//!
//! An ordered queue of candidates with a single drag gesture on the front
//! card. Releasing the drag past the threshold emits a [`SwipeDecision`] and
//! removes the card; anything shorter springs back.
//!
//! # Decision Rule
//!
//! Only horizontal displacement at release counts:
//! - `dx > 100` → Accept (swipe right)
//! - `dx < -100` → Reject (swipe left)
//! - otherwise → no decision, card returns to rest
//!
//! # Derived Visuals
//!
//! Rotation, fade and the NOPE / LIKE stamp are computed from `dx` on demand
//! ([`SwipeVisual::for_dx`]) and never stored. The engine only remembers where
//! the pointer went down and where it is now.
//!
//! # Collaborators
//!
//! Candidates arrive through a [`CandidateSource`]; decisions are returned to
//! the caller, who may forward them to a [`DecisionSink`].

mod config;
mod decision;
mod engine;
mod error;
mod gesture;
mod source;
mod threshold;
mod visual;

pub use config::DeckConfig;
pub use decision::{SwipeDecision, SwipeDirection, SwipeOutcome};
pub use engine::DeckEngine;
pub use error::{Result, SourceError};
pub use gesture::{GestureState, PointerPos};
pub use source::{CandidateSource, DecisionSink, FixtureSource, RecordingSink};
pub use threshold::{
    classify, indicator_visible, DECISION_THRESHOLD, INDICATOR_THRESHOLD, ROTATION_PER_UNIT,
    SCALE_STEP, STACK_DEPTH, Y_OFFSET_STEP,
};
pub use visual::{layer_placement, CardLayer, Indicator, SwipeVisual};
