//! Shared helpers for the end-to-end scenarios.

use auradeck_deck::DeckEngine;
use auradeck_persona::{Candidate, CandidateId, Persona};
use auradeck_wizard::{Credential, Session, WizardConfig, WizardEngine};

/// A candidate with only a name.
pub fn candidate(id: u64, name: &str) -> Candidate {
    Candidate::new(CandidateId::from(id), Persona::builder().username(name).build())
}

/// Deck over `A`, `B`, `C` with ids 1, 2, 3.
pub fn abc_deck() -> DeckEngine {
    DeckEngine::new(vec![candidate(1, "A"), candidate(2, "B"), candidate(3, "C")])
}

/// Session holding a provisional provider token.
pub fn pending_session(token: &str) -> Session {
    let mut session = Session::new();
    session.begin_signup(Credential::new(token));
    session
}

/// Wizard already moved to its final step.
pub fn wizard_at_final_step(config: WizardConfig) -> WizardEngine {
    let mut wizard = WizardEngine::new(config);
    for _ in 1..config.layout.len() {
        wizard.go_next();
    }
    wizard
}
