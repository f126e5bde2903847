//! In-memory stand-in for the account backend.
//!
//! Requests and responses go through their JSON wire form so the client
//! exercises the same encode and decode paths it would against a server.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use auradeck_wizard::{
    Credential, FinalizedPersona, LoginOutcome, LoginResponse, ProfileSubmitter, Receipt,
    SignupRequest, SignupResponse, WizardError,
};
use serde_json::{json, Value};
use tokio::sync::Mutex;
use tracing::{debug, info};

#[derive(Debug, Default)]
struct Accounts {
    /// Provider token → username.
    by_token: HashMap<String, String>,
    next_id: u64,
}

/// Account store keyed by identity-provider token.
#[derive(Debug)]
pub struct InMemoryBackend {
    accounts: Mutex<Accounts>,
    online: AtomicBool,
}

impl Default for InMemoryBackend {
    fn default() -> Self {
        Self {
            accounts: Mutex::new(Accounts::default()),
            online: AtomicBool::new(true),
        }
    }
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate losing or regaining the network.
    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::SeqCst);
    }

    pub fn is_online(&self) -> bool {
        self.online.load(Ordering::SeqCst)
    }

    pub async fn account_count(&self) -> usize {
        self.accounts.lock().await.by_token.len()
    }

    /// Sign in with a provider token.
    pub async fn login(&self, provider_token: &str) -> Result<LoginOutcome, WizardError> {
        self.ensure_online()?;
        let body = self.handle_login(provider_token).await;
        let response: LoginResponse = serde_json::from_str(&body)
            .map_err(|e| WizardError::NetworkUnavailable(e.to_string()))?;
        LoginOutcome::from_response(Credential::new(provider_token), response)
    }

    async fn handle_login(&self, provider_token: &str) -> String {
        let accounts = self.accounts.lock().await;
        let body = match accounts.by_token.get(provider_token) {
            Some(username) => json!({
                "access_token": session_token(username),
                "token_type": "bearer",
                "is_new_user": false,
            }),
            None => json!({
                "msg": "User not registered",
                "is_new_user": true,
            }),
        };
        body.to_string()
    }

    /// Handle a signup body. `Err` carries an error body.
    async fn handle_signup(&self, body: &str) -> Result<String, String> {
        let request: Value = serde_json::from_str(body)
            .map_err(|e| json!({ "detail": format!("Invalid body: {e}") }).to_string())?;
        let token = request["token"].as_str().unwrap_or_default();
        let username = request["username"].as_str().unwrap_or_default().trim();

        let mut accounts = self.accounts.lock().await;
        if token.is_empty() {
            return Err(json!({ "detail": "Invalid token" }).to_string());
        }
        if accounts.by_token.contains_key(token) {
            return Err(json!({ "detail": "User already exists" }).to_string());
        }
        if !username.is_empty()
            && accounts
                .by_token
                .values()
                .any(|u| u.eq_ignore_ascii_case(username))
        {
            return Err(json!({ "detail": "Username taken" }).to_string());
        }

        accounts.next_id += 1;
        let id = format!("{:024x}", accounts.next_id);
        accounts
            .by_token
            .insert(token.to_string(), username.to_string());
        info!(user_id = %id, username, "Account created");

        let response = SignupResponse {
            access_token: session_token(username),
            token_type: "bearer".to_string(),
            id,
        };
        serde_json::to_string(&response).map_err(|e| json!({ "detail": e.to_string() }).to_string())
    }

    fn ensure_online(&self) -> Result<(), WizardError> {
        if self.is_online() {
            Ok(())
        } else {
            Err(WizardError::NetworkUnavailable("backend offline".to_string()))
        }
    }
}

#[async_trait]
impl ProfileSubmitter for InMemoryBackend {
    async fn submit_profile(
        &self,
        credential: &Credential,
        persona: &FinalizedPersona,
    ) -> Result<Receipt, WizardError> {
        self.ensure_online()?;
        let body = serde_json::to_string(&SignupRequest::new(credential, persona))
            .map_err(|e| WizardError::SubmissionFailed { message: e.to_string() })?;
        debug!(bytes = body.len(), "Signup request");

        match self.handle_signup(&body).await {
            Ok(response) => serde_json::from_str::<SignupResponse>(&response)
                .map(|r| r.into_receipt(persona))
                .map_err(|e| WizardError::SubmissionFailed { message: e.to_string() }),
            Err(error_body) => Err(WizardError::from_response_body(&error_body)),
        }
    }
}

fn session_token(username: &str) -> String {
    format!("session.{}", username.to_ascii_lowercase().replace(' ', "-"))
}
