//! Swipe decisions emitted by the deck.

use std::fmt;

use auradeck_persona::CandidateId;
use serde::{Deserialize, Serialize};

/// Accept or reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwipeOutcome {
    Accept,
    Reject,
}

impl fmt::Display for SwipeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accept => write!(f, "Accept"),
            Self::Reject => write!(f, "Reject"),
        }
    }
}

/// Direction of an explicit button press or fling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    pub const fn outcome(self) -> SwipeOutcome {
        match self {
            Self::Left => SwipeOutcome::Reject,
            Self::Right => SwipeOutcome::Accept,
        }
    }
}

impl From<SwipeDirection> for SwipeOutcome {
    fn from(direction: SwipeDirection) -> Self {
        direction.outcome()
    }
}

/// The discrete result of a gesture or button press on the front card.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SwipeDecision {
    pub candidate_id: CandidateId,
    pub outcome: SwipeOutcome,
}

impl SwipeDecision {
    pub fn accept(candidate_id: CandidateId) -> Self {
        Self { candidate_id, outcome: SwipeOutcome::Accept }
    }

    pub fn reject(candidate_id: CandidateId) -> Self {
        Self { candidate_id, outcome: SwipeOutcome::Reject }
    }

    pub fn is_accept(&self) -> bool {
        self.outcome == SwipeOutcome::Accept
    }
}
