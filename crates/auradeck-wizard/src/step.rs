//! Wizard steps, layouts and the clamped step cursor.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WizardError;

/// A page of the onboarding wizard. Each owns a disjoint slice of the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WizardStep {
    /// Name, age, gender, emoji bio.
    Identity,
    /// Personality sliders, music taste, aura color.
    Vibe,
    /// Description, red flags, looking-for tags.
    Details,
    /// Prompt answers.
    Prompts,
}

impl WizardStep {
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Identity => "Who are you?",
            Self::Vibe => "Your vibe",
            Self::Details => "The details",
            Self::Prompts => "Break the ice",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identity => write!(f, "Identity"),
            Self::Vibe => write!(f, "Vibe"),
            Self::Details => write!(f, "Details"),
            Self::Prompts => write!(f, "Prompts"),
        }
    }
}

/// Which steps the wizard walks through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardLayout {
    /// Identity, Vibe, Details. Prompts keep their defaults.
    Compact,
    /// Identity, Vibe, Details, Prompts.
    #[default]
    Full,
}

impl WizardLayout {
    pub const fn steps(&self) -> &'static [WizardStep] {
        match self {
            Self::Compact => &[WizardStep::Identity, WizardStep::Vibe, WizardStep::Details],
            Self::Full => &[
                WizardStep::Identity,
                WizardStep::Vibe,
                WizardStep::Details,
                WizardStep::Prompts,
            ],
        }
    }

    /// Number of steps, `N`.
    pub const fn len(&self) -> usize {
        self.steps().len()
    }

    /// Step at a 1-based position.
    pub fn step_at(&self, position: usize) -> Option<WizardStep> {
        position
            .checked_sub(1)
            .and_then(|i| self.steps().get(i))
            .copied()
    }

    pub fn contains(&self, step: WizardStep) -> bool {
        self.steps().contains(&step)
    }
}

impl FromStr for WizardLayout {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" | "3" => Ok(Self::Compact),
            "full" | "4" => Ok(Self::Full),
            other => Err(WizardError::InvalidLayout(other.to_string())),
        }
    }
}

/// 1-based step index clamped to `[1, N]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardCursor {
    position: usize,
    len: usize,
}

impl WizardCursor {
    /// A cursor at step 1 of `len` steps (at least one).
    pub fn new(len: usize) -> Self {
        Self {
            position: 1,
            len: len.max(1),
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_first(&self) -> bool {
        self.position == 1
    }

    pub fn is_last(&self) -> bool {
        self.position == self.len
    }

    /// Step forward. Returns whether the cursor moved.
    pub fn advance(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.position += 1;
        true
    }

    /// Step back. Returns whether the cursor moved.
    pub fn retreat(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.position -= 1;
        true
    }

    pub fn reset(&mut self) {
        self.position = 1;
    }
}
