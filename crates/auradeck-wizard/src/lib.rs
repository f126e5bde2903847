//! Auradeck Onboarding Wizard
//!
//! A step cursor over a [`PersonaDraft`]. Each step edits its own slice of
//! the draft; the final step hands the finished draft to a
//! [`ProfileSubmitter`] together with the provisional credential held in the
//! [`Session`].
//!
//! # Bounded Fields
//!
//! - Personality sliders are clamped to `1..=10`, whatever the input.
//! - The looking-for set never holds more than three tags. A fourth toggle
//!   is silently ignored.
//! - The cursor is clamped to `[1, N]`.
//!
//! # Submission
//!
//! Submitting is two-phase: [`WizardEngine::begin_submit`] issues a
//! [`SubmissionTicket`] and locks the wizard, and
//! [`WizardEngine::complete_submit`] applies the backend's answer. A ticket
//! from an abandoned attempt is refused, so a late response can never touch
//! a wizard that has moved on. [`WizardEngine::submit`] does both around an
//! async call.
//!
//! Failures keep the draft intact for a retry.

mod config;
mod draft;
mod engine;
mod error;
mod policy;
mod session;
mod step;
mod submit;

pub use config::WizardConfig;
pub use draft::{
    DraftField, FinalizedPersona, PersonaDraft, BIO_EMOJI_MAX_CHARS, DEFAULT_AGE, DEFAULT_PROMPTS,
    DESCRIPTION_WORD_HINT,
};
pub use engine::{Navigation, StepProgress, WizardEngine, WizardState};
pub use error::{Result, WizardError, GENERIC_LOGIN_FAILURE, GENERIC_SIGNUP_FAILURE};
pub use policy::{ValidationIssue, ValidationPolicy};
pub use session::{Credential, LoginOutcome, LoginResponse, Session, SessionState, SessionUser};
pub use step::{WizardCursor, WizardLayout, WizardStep};
pub use submit::{ProfileSubmitter, Receipt, SignupRequest, SignupResponse, SubmissionTicket};
