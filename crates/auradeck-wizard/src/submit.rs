//! The profile submission boundary.

use async_trait::async_trait;
use auradeck_persona::Persona;
use serde::{Deserialize, Serialize};

use crate::draft::FinalizedPersona;
use crate::error::Result;
use crate::session::{Credential, SessionUser};

/// Backend that turns a provisional credential and a profile into an account.
#[async_trait]
pub trait ProfileSubmitter: Send + Sync {
    async fn submit_profile(
        &self,
        credential: &Credential,
        persona: &FinalizedPersona,
    ) -> Result<Receipt>;
}

/// A successful signup.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    /// Long-lived session token replacing the provisional one.
    pub session: Credential,
    /// The persisted persona.
    pub persona: Persona,
    pub user_id: String,
}

impl Receipt {
    pub fn session_user(&self) -> SessionUser {
        SessionUser {
            user_id: Some(self.user_id.clone()),
            email: None,
            persona: Some(self.persona.clone()),
        }
    }
}

/// Signup request body: the profile plus the provider token.
#[derive(Debug, Serialize)]
pub struct SignupRequest<'a> {
    #[serde(flatten)]
    pub persona: &'a FinalizedPersona,
    pub token: &'a str,
}

impl<'a> SignupRequest<'a> {
    pub fn new(credential: &'a Credential, persona: &'a FinalizedPersona) -> Self {
        Self {
            persona,
            token: credential.expose(),
        }
    }
}

/// Signup response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupResponse {
    pub access_token: String,
    #[serde(default = "bearer")]
    pub token_type: String,
    pub id: String,
}

fn bearer() -> String {
    "bearer".to_string()
}

impl SignupResponse {
    pub fn into_receipt(self, persona: &FinalizedPersona) -> Receipt {
        Receipt {
            session: Credential::new(self.access_token),
            persona: persona.to_persona(),
            user_id: self.id,
        }
    }
}

/// Proof that a submission was started, bound to one attempt.
///
/// Hand it back to [`WizardEngine::complete_submit`](crate::WizardEngine::complete_submit)
/// with the backend's answer. Tickets from abandoned attempts are rejected.
#[derive(Debug, Clone)]
pub struct SubmissionTicket {
    pub(crate) generation: u64,
    credential: Credential,
    persona: FinalizedPersona,
}

impl SubmissionTicket {
    pub(crate) fn new(generation: u64, credential: Credential, persona: FinalizedPersona) -> Self {
        Self {
            generation,
            credential,
            persona,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    pub fn persona(&self) -> &FinalizedPersona {
        &self.persona
    }
}
