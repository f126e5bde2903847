//! Error types for the onboarding wizard.
//!
//! Local edits never fail. Everything here comes from the submission
//! boundary or from a submit attempted in the wrong state.

use serde::Deserialize;
use thiserror::Error;

use crate::policy::ValidationIssue;

/// Result type for wizard operations.
pub type Result<T> = std::result::Result<T, WizardError>;

/// Shown when the backend rejects a signup without saying why.
pub const GENERIC_SIGNUP_FAILURE: &str = "Signup Failed";

/// Shown when the identity provider sign-in cannot be completed.
pub const GENERIC_LOGIN_FAILURE: &str = "Google Auth Failed";

/// Errors surfaced by the wizard and its collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    /// The draft does not satisfy the active validation policy.
    #[error("profile incomplete: {} issue(s)", issues.len())]
    ValidationRejected { issues: Vec<ValidationIssue> },

    /// The backend refused the profile.
    #[error("submission failed: {message}")]
    SubmissionFailed { message: String },

    /// Sign-in with the identity provider did not produce a usable session.
    #[error("login failed: {message}")]
    LoginFailed { message: String },

    /// No provisional credential at submit time.
    #[error("session expired")]
    SessionExpired,

    /// The backend could not be reached.
    #[error("network unavailable: {0}")]
    NetworkUnavailable(String),

    #[error("submit is only valid on the final step")]
    NotAtFinalStep,

    #[error("a submission is already in flight")]
    SubmitInFlight,

    #[error("wizard already completed")]
    AlreadyCompleted,

    /// A response arrived for a submission that was abandoned or superseded.
    #[error("stale submission response")]
    StaleSubmission,

    #[error("unknown wizard layout: {0}")]
    InvalidLayout(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

impl WizardError {
    /// Build a `SubmissionFailed` from a backend error body such as
    /// `{"detail": "User already exists"}`.
    pub fn from_response_body(body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.detail)
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| GENERIC_SIGNUP_FAILURE.to_string());
        Self::SubmissionFailed { message }
    }

    /// Text for the user. Never empty; backend messages pass through verbatim.
    pub fn user_message(&self) -> String {
        match self {
            Self::ValidationRejected { issues } if !issues.is_empty() => issues
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(". "),
            Self::ValidationRejected { .. } => "Your profile isn't finished yet".to_string(),
            Self::SubmissionFailed { message } if !message.trim().is_empty() => message.clone(),
            Self::SubmissionFailed { .. } => GENERIC_SIGNUP_FAILURE.to_string(),
            Self::LoginFailed { message } if !message.trim().is_empty() => message.clone(),
            Self::LoginFailed { .. } => GENERIC_LOGIN_FAILURE.to_string(),
            Self::SessionExpired => "No sign-in token found. Please sign in again.".to_string(),
            Self::NetworkUnavailable(_) => {
                "Can't reach the server. Check your connection and try again.".to_string()
            }
            Self::NotAtFinalStep => "Finish the remaining steps first".to_string(),
            Self::SubmitInFlight => "Hang on, we're still saving your profile".to_string(),
            Self::AlreadyCompleted => "Your profile is already set up".to_string(),
            Self::StaleSubmission => "That request is no longer current".to_string(),
            Self::InvalidLayout(layout) => format!("Unknown wizard layout '{layout}'"),
        }
    }

    /// Whether the user keeps their draft and may retry.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::SubmissionFailed { .. } | Self::NetworkUnavailable(_) | Self::ValidationRejected { .. }
        )
    }
}
