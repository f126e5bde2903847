//! Explicit auth session.
//!
//! The session is passed to whoever needs it instead of living in global
//! state. Signup moves it through three states:
//!
//! ```text
//! Anonymous ──NewUser──▶ PendingSignup{provisional} ──establish──▶ Active{token, user}
//!     ▲                                                                 │
//!     └──────────────────────────── logout ─────────────────────────────┘
//! ```

use std::fmt;

use auradeck_persona::Persona;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Result, WizardError, GENERIC_LOGIN_FAILURE};

/// Opaque bearer token. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token, for putting on the wire.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// What we know about the signed-in user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub user_id: Option<String>,
    pub email: Option<String>,
    pub persona: Option<Persona>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    #[default]
    Anonymous,
    /// Identity provider accepted the user but no profile exists yet.
    PendingSignup { provisional: Credential },
    Active { token: Credential, user: SessionUser },
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Anonymous => write!(f, "Anonymous"),
            Self::PendingSignup { .. } => write!(f, "PendingSignup"),
            Self::Active { .. } => write!(f, "Active"),
        }
    }
}

/// Identity-provider login response.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub is_new_user: bool,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Result of signing in with the identity provider.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// No profile yet: keep the provider token and run the wizard.
    NewUser { provisional: Credential },
    /// Existing user: straight to the deck.
    LoggedIn { token: Credential, email: Option<String> },
}

impl LoginOutcome {
    /// Interpret a login response for the provider token that was sent.
    pub fn from_response(provider_token: Credential, response: LoginResponse) -> Result<Self> {
        if response.is_new_user {
            return Ok(Self::NewUser {
                provisional: provider_token,
            });
        }
        match response.access_token {
            Some(token) if !token.trim().is_empty() => Ok(Self::LoggedIn {
                token: Credential::new(token),
                email: response.email,
            }),
            _ => Err(WizardError::LoginFailed {
                message: GENERIC_LOGIN_FAILURE.to_string(),
            }),
        }
    }
}

/// The auth session shared by the wizard and the rest of the client.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    state: SessionState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Hold a provider token while the user builds a profile.
    pub fn begin_signup(&mut self, provisional: Credential) {
        debug!("Signup started");
        self.state = SessionState::PendingSignup { provisional };
    }

    /// Install a real session. Clears any provisional credential.
    pub fn establish(&mut self, token: Credential, user: SessionUser) {
        info!(user_id = ?user.user_id, "Session established");
        self.state = SessionState::Active { token, user };
    }

    pub fn apply_login(&mut self, outcome: LoginOutcome) {
        match outcome {
            LoginOutcome::NewUser { provisional } => self.begin_signup(provisional),
            LoginOutcome::LoggedIn { token, email } => self.establish(
                token,
                SessionUser {
                    email,
                    ..SessionUser::default()
                },
            ),
        }
    }

    pub fn logout(&mut self) {
        info!(from = %self.state, "Logged out");
        self.state = SessionState::Anonymous;
    }

    pub fn has_valid_session(&self) -> bool {
        matches!(&self.state, SessionState::Active { token, .. } if !token.is_empty())
    }

    pub fn provisional_credential(&self) -> Option<&Credential> {
        match &self.state {
            SessionState::PendingSignup { provisional } if !provisional.is_empty() => {
                Some(provisional)
            }
            _ => None,
        }
    }

    pub fn token(&self) -> Option<&Credential> {
        match &self.state {
            SessionState::Active { token, .. } => Some(token),
            _ => None,
        }
    }

    pub fn user(&self) -> Option<&SessionUser> {
        match &self.state {
            SessionState::Active { user, .. } => Some(user),
            _ => None,
        }
    }
}
