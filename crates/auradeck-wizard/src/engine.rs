//! The onboarding wizard state machine.
//!
//! ```text
//!  Step(1) ⇄ Step(2) ⇄ … ⇄ Step(N) ──begin_submit──▶ Submitting
//!                             ▲                          │
//!                             └──── failure (last_error) ┤
//!                                                        ▼ success
//!                                                    Completed
//! ```
//!
//! Edits and navigation are total. While a submission is in flight, or after
//! the wizard completes, they are ignored.

use std::fmt;

use auradeck_persona::{PersonalityAxis, ToggleOutcome};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::WizardConfig;
use crate::draft::{DraftField, PersonaDraft};
use crate::error::{Result, WizardError};
use crate::policy::ValidationIssue;
use crate::session::Session;
use crate::step::{WizardCursor, WizardStep};
use crate::submit::{ProfileSubmitter, Receipt, SubmissionTicket};

/// Where the wizard is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WizardState {
    /// Editing the 1-based step.
    Step(usize),
    Submitting,
    Completed,
}

impl fmt::Display for WizardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Step(i) => write!(f, "Step({i})"),
            Self::Submitting => write!(f, "Submitting"),
            Self::Completed => write!(f, "Completed"),
        }
    }
}

/// Result of a navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Moved,
    /// Already at the first or last step, or the wizard is locked.
    AtBoundary,
    /// The validation policy gates navigation and the current step has gaps.
    Blocked(Vec<ValidationIssue>),
}

/// One segment of the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepProgress {
    pub step: WizardStep,
    /// At or behind the cursor.
    pub reached: bool,
    pub current: bool,
    /// The step's fields differ from their defaults.
    pub filled: bool,
}

/// Onboarding wizard over a [`PersonaDraft`].
#[derive(Debug, Clone)]
pub struct WizardEngine {
    config: WizardConfig,
    cursor: WizardCursor,
    /// `None` once the wizard completes.
    draft: Option<PersonaDraft>,
    submitting: bool,
    generation: u64,
    last_error: Option<WizardError>,
}

impl Default for WizardEngine {
    fn default() -> Self {
        Self::new(WizardConfig::default())
    }
}

impl WizardEngine {
    /// Start a fresh wizard at step 1 with a default draft.
    pub fn new(config: WizardConfig) -> Self {
        Self {
            cursor: WizardCursor::new(config.layout.len()),
            config,
            draft: Some(PersonaDraft::new()),
            submitting: false,
            generation: 0,
            last_error: None,
        }
    }

    pub fn config(&self) -> &WizardConfig {
        &self.config
    }

    pub fn state(&self) -> WizardState {
        if self.draft.is_none() {
            WizardState::Completed
        } else if self.submitting {
            WizardState::Submitting
        } else {
            WizardState::Step(self.cursor.position())
        }
    }

    pub fn cursor(&self) -> &WizardCursor {
        &self.cursor
    }

    /// The step under the cursor.
    pub fn current_step(&self) -> Option<WizardStep> {
        self.config.layout.step_at(self.cursor.position())
    }

    /// The draft, until the wizard completes.
    pub fn draft(&self) -> Option<&PersonaDraft> {
        self.draft.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_completed(&self) -> bool {
        self.draft.is_none()
    }

    /// The error from the last failed submit, cleared on the next attempt.
    pub fn last_error(&self) -> Option<&WizardError> {
        self.last_error.as_ref()
    }

    fn editable(&mut self) -> Option<&mut PersonaDraft> {
        if self.submitting {
            debug!("Edit ignored while submitting");
            return None;
        }
        self.draft.as_mut()
    }

    /// Apply one field update. Returns whether the draft changed.
    pub fn set_field(&mut self, field: DraftField) -> bool {
        let owner = field.step();
        match self.editable() {
            Some(draft) => {
                let applied = draft.apply(field);
                debug!(step = %owner, applied, "Field updated");
                applied
            }
            None => false,
        }
    }

    /// Add or remove a looking-for tag; a fourth tag is ignored.
    pub fn toggle_looking_for(&mut self, tag: &str) -> ToggleOutcome {
        match self.editable() {
            Some(draft) => {
                let outcome = draft.toggle_looking_for(tag);
                debug!(tag, ?outcome, "Looking-for toggled");
                outcome
            }
            None => ToggleOutcome::Ignored,
        }
    }

    /// Store a clamped slider score. `None` keeps the current score.
    ///
    /// Returns the stored score, or `None` when the wizard is locked.
    pub fn set_slider_value(
        &mut self,
        axis: PersonalityAxis,
        value: impl Into<Option<i32>>,
    ) -> Option<u8> {
        let value = value.into();
        self.editable().map(|draft| draft.set_slider(axis, value))
    }

    /// Move forward one step.
    pub fn go_next(&mut self) -> Navigation {
        if self.submitting || self.is_completed() {
            return Navigation::AtBoundary;
        }
        if self.config.policy.gate_navigation {
            let issues = self.current_issues();
            if !issues.is_empty() {
                debug!(step = self.cursor.position(), issues = issues.len(), "Navigation blocked");
                return Navigation::Blocked(issues);
            }
        }
        self.navigate(WizardCursor::advance)
    }

    /// Move back one step. Never gated.
    pub fn go_back(&mut self) -> Navigation {
        if self.submitting || self.is_completed() {
            return Navigation::AtBoundary;
        }
        self.navigate(WizardCursor::retreat)
    }

    fn navigate(&mut self, step: fn(&mut WizardCursor) -> bool) -> Navigation {
        let from = self.cursor.position();
        if step(&mut self.cursor) {
            debug!(from, to = self.cursor.position(), "Step moved");
            Navigation::Moved
        } else {
            Navigation::AtBoundary
        }
    }

    fn current_issues(&self) -> Vec<ValidationIssue> {
        match (&self.draft, self.current_step()) {
            (Some(draft), Some(step)) => self.config.policy.check_step(draft, step),
            _ => Vec::new(),
        }
    }

    /// Policy issues across the whole layout.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        self.draft
            .as_ref()
            .map(|d| self.config.policy.check(d, self.config.layout))
            .unwrap_or_default()
    }

    pub fn progress(&self) -> Vec<StepProgress> {
        let position = self.cursor.position();
        self.config
            .layout
            .steps()
            .iter()
            .enumerate()
            .map(|(i, &step)| StepProgress {
                step,
                reached: i < position,
                current: i + 1 == position,
                filled: self
                    .draft
                    .as_ref()
                    .is_some_and(|d| d.is_step_filled(step)),
            })
            .collect()
    }

    /// Start a submission.
    ///
    /// Requires the final step, no submission in flight, a draft that passes
    /// the policy and a provisional credential in `session`.
    pub fn begin_submit(&mut self, session: &Session) -> Result<SubmissionTicket> {
        let Some(draft) = self.draft.as_ref() else {
            return Err(WizardError::AlreadyCompleted);
        };
        if self.submitting {
            return Err(WizardError::SubmitInFlight);
        }
        if !self.cursor.is_last() {
            return Err(WizardError::NotAtFinalStep);
        }

        let issues = self.config.policy.check(draft, self.config.layout);
        if !issues.is_empty() {
            return Err(self.fail(WizardError::ValidationRejected { issues }));
        }

        let Some(credential) = session.provisional_credential().cloned() else {
            return Err(self.fail(WizardError::SessionExpired));
        };

        let persona = draft.finalize();
        self.generation += 1;
        self.submitting = true;
        self.last_error = None;
        info!(generation = self.generation, username = %persona.username, "Submitting profile");

        Ok(SubmissionTicket::new(self.generation, credential, persona))
    }

    /// Apply the backend's answer to a submission.
    ///
    /// Success completes the wizard and discards the draft. Failure returns
    /// to the final step with the draft intact and the error recorded.
    pub fn complete_submit(
        &mut self,
        ticket: SubmissionTicket,
        result: Result<Receipt>,
    ) -> Result<Receipt> {
        if !self.submitting || ticket.generation != self.generation {
            warn!(
                ticket = ticket.generation,
                current = self.generation,
                "Dropping stale submission response"
            );
            return Err(WizardError::StaleSubmission);
        }
        self.submitting = false;

        match result {
            Ok(receipt) => {
                self.draft = None;
                self.last_error = None;
                info!(user_id = %receipt.user_id, "Profile created");
                Ok(receipt)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Forget an in-flight submission, e.g. when the user navigates away.
    pub fn abandon_submit(&mut self) {
        if self.submitting {
            self.generation += 1;
            self.submitting = false;
            debug!(generation = self.generation, "Submission abandoned");
        }
    }

    /// Submit the draft and wait for the backend.
    ///
    /// On success the new session is installed in `session`.
    pub async fn submit<S>(&mut self, session: &mut Session, submitter: &S) -> Result<Receipt>
    where
        S: ProfileSubmitter + ?Sized,
    {
        let ticket = self.begin_submit(session)?;
        let result = submitter
            .submit_profile(ticket.credential(), ticket.persona())
            .await;
        let receipt = self.complete_submit(ticket, result)?;
        session.establish(receipt.session.clone(), receipt.session_user());
        Ok(receipt)
    }

    fn fail(&mut self, error: WizardError) -> WizardError {
        warn!(error = %error, "Submission failed");
        self.last_error = Some(error.clone());
        error
    }
}
