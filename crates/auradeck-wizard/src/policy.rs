//! Required-field policy.
//!
//! The default policy accepts anything, which is how the product shipped.
//! [`ValidationPolicy::strict`] turns on every check and gates navigation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::draft::PersonaDraft;
use crate::step::{WizardLayout, WizardStep};

/// A single reason the draft is not ready.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationIssue {
    MissingUsername,
    AgeBelowMinimum { minimum: u32, age: u32 },
    NoLookingFor,
    UnansweredPrompt { index: usize },
}

impl ValidationIssue {
    /// The step where the user can fix this.
    pub const fn step(&self) -> WizardStep {
        match self {
            Self::MissingUsername | Self::AgeBelowMinimum { .. } => WizardStep::Identity,
            Self::NoLookingFor => WizardStep::Details,
            Self::UnansweredPrompt { .. } => WizardStep::Prompts,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingUsername => write!(f, "Pick a display name"),
            Self::AgeBelowMinimum { minimum, .. } => write!(f, "You must be at least {minimum}"),
            Self::NoLookingFor => write!(f, "Choose what you're looking for"),
            Self::UnansweredPrompt { index } => write!(f, "Answer prompt {}", index + 1),
        }
    }
}

/// Which fields must be filled before moving on or submitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationPolicy {
    pub require_username: bool,
    pub min_age: Option<u32>,
    pub require_looking_for: bool,
    pub require_prompt_answers: bool,
    /// Also block `go_next` on the current step's issues. Otherwise the
    /// policy is only consulted at submit.
    pub gate_navigation: bool,
}

impl ValidationPolicy {
    /// No checks at all.
    #[must_use]
    pub fn permissive() -> Self {
        Self::default()
    }

    /// Every check, adults only, gated navigation.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            require_username: true,
            min_age: Some(18),
            require_looking_for: true,
            require_prompt_answers: true,
            gate_navigation: true,
        }
    }

    #[must_use]
    pub fn with_min_age(mut self, age: u32) -> Self {
        self.min_age = Some(age);
        self
    }

    #[must_use]
    pub fn with_gated_navigation(mut self, gated: bool) -> Self {
        self.gate_navigation = gated;
        self
    }

    /// Issues in the fields owned by one step.
    pub fn check_step(&self, draft: &PersonaDraft, step: WizardStep) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        match step {
            WizardStep::Identity => {
                if self.require_username && draft.username.trim().is_empty() {
                    issues.push(ValidationIssue::MissingUsername);
                }
                if let Some(minimum) = self.min_age {
                    if draft.age < minimum {
                        issues.push(ValidationIssue::AgeBelowMinimum {
                            minimum,
                            age: draft.age,
                        });
                    }
                }
            }
            WizardStep::Vibe => {}
            WizardStep::Details => {
                if self.require_looking_for && draft.looking_for().is_empty() {
                    issues.push(ValidationIssue::NoLookingFor);
                }
            }
            WizardStep::Prompts => {
                if self.require_prompt_answers {
                    issues.extend(
                        draft
                            .prompts()
                            .iter()
                            .enumerate()
                            .filter(|(_, p)| !p.is_answered())
                            .map(|(index, _)| ValidationIssue::UnansweredPrompt { index }),
                    );
                }
            }
        }
        issues
    }

    /// Issues across every step the layout shows.
    pub fn check(&self, draft: &PersonaDraft, layout: WizardLayout) -> Vec<ValidationIssue> {
        layout
            .steps()
            .iter()
            .flat_map(|step| self.check_step(draft, *step))
            .collect()
    }
}
