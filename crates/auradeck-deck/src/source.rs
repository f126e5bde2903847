//! Collaborators at the deck boundary.
//!
//! Where candidates come from and where decisions go are both outside the
//! engine. The engine hands decisions back to its caller, who forwards them
//! to a [`DecisionSink`].

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use auradeck_persona::{
    AuraColor, Candidate, CandidateId, CandidateRecord, Gender, Persona, PersonalityAxis, Sliders,
};
use tracing::debug;

use crate::decision::SwipeDecision;
use crate::error::{Result, SourceError};

/// Supplies the candidate list for a deck.
#[async_trait]
pub trait CandidateSource: Send + Sync {
    async fn fetch_candidates(&self) -> Result<Vec<Candidate>>;
}

/// Receives swipe decisions. Fire-and-forget: failures are the sink's problem.
pub trait DecisionSink {
    fn record(&self, decision: &SwipeDecision);
}

/// A fixed, in-memory candidate list.
#[derive(Debug, Clone)]
pub struct FixtureSource {
    candidates: Vec<Candidate>,
}

impl FixtureSource {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }

    /// The three demo candidates shipped with the app.
    pub fn bundled() -> Self {
        Self::new(bundled_candidates())
    }

    /// Decode a candidate list in the backend's wire shape.
    ///
    /// Missing persona fields get display defaults. A body that is not a
    /// JSON array of candidate records is [`SourceError::Malformed`].
    pub fn from_json(body: &str) -> Result<Self> {
        let records: Vec<CandidateRecord> =
            serde_json::from_str(body).map_err(|e| SourceError::Malformed(e.to_string()))?;
        debug!(candidates = records.len(), "Decoded candidate payload");
        Ok(Self::new(records.into_iter().map(Candidate::from).collect()))
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }
}

impl Default for FixtureSource {
    fn default() -> Self {
        Self::bundled()
    }
}

#[async_trait]
impl CandidateSource for FixtureSource {
    async fn fetch_candidates(&self) -> Result<Vec<Candidate>> {
        Ok(self.candidates.clone())
    }
}

/// Keeps every decision in memory, in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    decisions: Mutex<Vec<SwipeDecision>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn decisions(&self) -> Vec<SwipeDecision> {
        self.decisions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn accepted(&self) -> Vec<CandidateId> {
        self.decisions()
            .into_iter()
            .filter(SwipeDecision::is_accept)
            .map(|d| d.candidate_id)
            .collect()
    }
}

impl DecisionSink for RecordingSink {
    fn record(&self, decision: &SwipeDecision) {
        self.decisions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(decision.clone());
    }
}

fn bundled_candidates() -> Vec<Candidate> {
    vec![
        Candidate::new(
            CandidateId::new("1"),
            Persona::builder()
                .username("NeonGhost")
                .age(24)
                .gender(Gender::NB)
                .aura_color(AuraColor::rgb(0x7b, 0x1f, 0xa2))
                .bio_emojis("\u{1f47e} \u{1f52e} \u{1f3b9}")
                .description(
                    "Living in a cyberpunk fantasy. If you can't handle my techno playlists, we can't vibe.",
                )
                .music_taste("Techno & Synthwave")
                .red_flags("I forget to reply for 3 business days.")
                .looking_for(["Rave Buddy", "Vibes"])
                .sliders(sliders(3, 2, 8, 9))
                .build(),
        ),
        Candidate::new(
            CandidateId::new("2"),
            Persona::builder()
                .username("PixelDrifter")
                .age(26)
                .gender(Gender::M)
                .aura_color(AuraColor::rgb(0xff, 0x3b, 0x30))
                .bio_emojis("\u{1f3d4}\u{fe0f} \u{1f3ae} \u{1f336}\u{fe0f}")
                .description(
                    "Chasing peaks and high scores. I make the best spicy ramen you'll ever have.",
                )
                .music_taste("Indie Folk & Lo-Fi")
                .red_flags("I will judge your coffee order.")
                .looking_for(["Hiking", "Gaming"])
                .sliders(sliders(8, 7, 5, 6))
                .build(),
        ),
        Candidate::new(
            CandidateId::new("3"),
            Persona::builder()
                .username("VelvetThunder")
                .age(22)
                .gender(Gender::F)
                .aura_color(AuraColor::rgb(0x22, 0xc5, 0x5e))
                .bio_emojis("\u{1f33f} \u{1f408}\u{200d}\u{2b1b} \u{1f375}")
                .description("Plant parent and vinyl collector. My cat has to approve of you first.")
                .music_taste("Jazz & Neo-Soul")
                .red_flags("")
                .looking_for(["Casual", "Chat"])
                .sliders(sliders(4, 9, 2, 8))
                .build(),
        ),
    ]
}

fn sliders(social_battery: i64, texting_style: i64, planning_style: i64, humor: i64) -> Sliders {
    Sliders::default()
        .with(PersonalityAxis::SocialBattery, social_battery)
        .with(PersonalityAxis::TextingStyle, texting_style)
        .with(PersonalityAxis::PlanningStyle, planning_style)
        .with(PersonalityAxis::Humor, humor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::DeckEngine;
    use crate::DeckConfig;

    #[tokio::test]
    async fn fixture_loads_three_candidates() {
        let deck = DeckEngine::load(&FixtureSource::bundled(), DeckConfig::default())
            .await
            .unwrap();
        let names: Vec<_> = deck.candidates().map(Candidate::name).collect();
        assert_eq!(names, ["NeonGhost", "PixelDrifter", "VelvetThunder"]);
    }

    #[test]
    fn fixture_matches_demo_records() {
        let all = bundled_candidates();
        let neon = &all[0].persona;
        assert_eq!(neon.age, Some(24));
        assert_eq!(neon.aura_color.to_hex(), "#7b1fa2");
        assert_eq!(neon.music_taste, "Techno & Synthwave");
        assert_eq!(neon.looking_for.as_slice(), ["Rave Buddy", "Vibes"]);
        assert_eq!(neon.sliders.get(PersonalityAxis::TextingStyle), 2);
        assert_eq!(neon.sliders.get(PersonalityAxis::PlanningStyle), 8);

        assert_eq!(all[1].persona.aura_color, AuraColor::rgb(0xff, 0x3b, 0x30));

        let velvet = &all[2].persona;
        assert_eq!(velvet.age, Some(22));
        assert_eq!(velvet.red_flags, None);

        for c in &all {
            assert!(c.persona.looking_for.len() <= auradeck_persona::MAX_LOOKING_FOR);
            assert!(c.persona.prompts.is_empty());
        }
    }

    #[tokio::test]
    async fn json_source_applies_defaults() {
        let source = FixtureSource::from_json(
            r#"[
                {"id": "65f0c2a1b2c3d4e5f6a7b8c9", "username": "NeonGhost", "age": 24},
                {"id": 2, "red_flags": "  "}
            ]"#,
        )
        .unwrap();
        let candidates = source.fetch_candidates().await.unwrap();
        assert_eq!(candidates[0].id.as_str(), "65f0c2a1b2c3d4e5f6a7b8c9");
        assert_eq!(candidates[1].id, CandidateId::new("2"));
        assert_eq!(candidates[1].name(), "Mystery Soul");
        assert_eq!(candidates[1].persona.red_flags, None);
    }

    #[test]
    fn json_source_rejects_malformed_payload() {
        for body in ["{}", "not json", r#"[{"username": "NoId"}]"#] {
            assert!(
                matches!(FixtureSource::from_json(body), Err(SourceError::Malformed(_))),
                "{body}"
            );
        }
    }

    #[test]
    fn recording_sink_keeps_order() {
        let sink = RecordingSink::new();
        sink.record(&SwipeDecision::accept(CandidateId::new("1")));
        sink.record(&SwipeDecision::reject(CandidateId::new("2")));
        sink.record(&SwipeDecision::accept(CandidateId::new("3")));
        assert_eq!(sink.decisions().len(), 3);
        assert_eq!(sink.accepted(), [CandidateId::new("1"), CandidateId::new("3")]);
    }

    #[tokio::test]
    async fn sources_are_object_safe() {
        let source: Box<dyn CandidateSource> = Box::new(FixtureSource::new(Vec::new()));
        assert!(source.fetch_candidates().await.unwrap().is_empty());
    }
}
