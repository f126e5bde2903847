//! The persona draft accumulated across wizard steps.

use auradeck_persona::{
    clamp_score, AuraColor, Gender, Persona, PersonalityAxis, Prompt, Sliders, TagSet,
    ToggleOutcome,
};
use serde::{Deserialize, Serialize};

use crate::step::WizardStep;

/// Age a fresh draft starts at.
pub const DEFAULT_AGE: u32 = 20;

/// Longest emoji bio accepted, in characters.
pub const BIO_EMOJI_MAX_CHARS: usize = 8;

/// Suggested description length. Advisory only.
pub const DESCRIPTION_WORD_HINT: usize = 200;

/// Questions every draft starts with. Questions are fixed; answers are edited.
pub const DEFAULT_PROMPTS: [&str; 2] = ["My toxic trait is...", "The hill I will die on is..."];

/// A single typed update to the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftField {
    Username(String),
    Age(u32),
    Gender(Gender),
    BioEmojis(String),
    MusicTaste(String),
    AuraColor(AuraColor),
    Slider { axis: PersonalityAxis, value: i32 },
    Description(String),
    RedFlags(String),
    PromptAnswer { index: usize, answer: String },
}

impl DraftField {
    /// The step whose controls edit this field.
    pub const fn step(&self) -> WizardStep {
        match self {
            Self::Username(_) | Self::Age(_) | Self::Gender(_) | Self::BioEmojis(_) => {
                WizardStep::Identity
            }
            Self::MusicTaste(_) | Self::AuraColor(_) | Self::Slider { .. } => WizardStep::Vibe,
            Self::Description(_) | Self::RedFlags(_) => WizardStep::Details,
            Self::PromptAnswer { .. } => WizardStep::Prompts,
        }
    }
}

/// Mutable onboarding state. Created with defaults, discarded after signup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaDraft {
    pub username: String,
    pub age: u32,
    pub gender: Gender,
    bio_emojis: String,
    pub music_taste: String,
    pub aura_color: AuraColor,
    sliders: Sliders,
    pub description: String,
    pub red_flags: String,
    looking_for: TagSet,
    prompts: Vec<Prompt>,
    /// Free-form interest tags, separate from the looking-for set.
    pub tags: Vec<String>,
}

impl Default for PersonaDraft {
    fn default() -> Self {
        Self {
            username: String::new(),
            age: DEFAULT_AGE,
            gender: Gender::NB,
            bio_emojis: String::new(),
            music_taste: String::new(),
            aura_color: AuraColor::DRAFT_DEFAULT,
            sliders: Sliders::default(),
            description: String::new(),
            red_flags: String::new(),
            looking_for: TagSet::new(),
            prompts: DEFAULT_PROMPTS.iter().map(|q| Prompt::open(*q)).collect(),
            tags: Vec::new(),
        }
    }
}

impl PersonaDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one update. Returns `false` when the update had nothing to
    /// target (a prompt index past the end).
    pub fn apply(&mut self, field: DraftField) -> bool {
        match field {
            DraftField::Username(v) => self.username = v,
            DraftField::Age(v) => self.age = v,
            DraftField::Gender(v) => self.gender = v,
            DraftField::BioEmojis(v) => self.set_bio_emojis(&v),
            DraftField::MusicTaste(v) => self.music_taste = v,
            DraftField::AuraColor(v) => self.aura_color = v,
            DraftField::Slider { axis, value } => {
                self.set_slider(axis, Some(value));
            }
            DraftField::Description(v) => self.description = v,
            DraftField::RedFlags(v) => self.red_flags = v,
            DraftField::PromptAnswer { index, answer } => match self.prompts.get_mut(index) {
                Some(prompt) => prompt.answer = answer,
                None => return false,
            },
        }
        true
    }

    pub fn bio_emojis(&self) -> &str {
        &self.bio_emojis
    }

    /// Store the bio, truncated to [`BIO_EMOJI_MAX_CHARS`] characters.
    pub fn set_bio_emojis(&mut self, bio: &str) {
        self.bio_emojis = bio.chars().take(BIO_EMOJI_MAX_CHARS).collect();
    }

    pub fn sliders(&self) -> &Sliders {
        &self.sliders
    }

    /// Clamp into range and store. `None` keeps the current value.
    pub fn set_slider(&mut self, axis: PersonalityAxis, value: Option<i32>) -> u8 {
        match value {
            Some(v) => self.sliders.set(axis, i64::from(v)),
            None => {
                let current = clamp_score(i64::from(self.sliders.get(axis)));
                self.sliders.set(axis, i64::from(current))
            }
        }
    }

    pub fn looking_for(&self) -> &TagSet {
        &self.looking_for
    }

    pub fn toggle_looking_for(&mut self, tag: &str) -> ToggleOutcome {
        self.looking_for.toggle(tag)
    }

    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    pub fn description_word_count(&self) -> usize {
        self.description.split_whitespace().count()
    }

    /// Whether the fields a step owns hold anything beyond their defaults.
    pub fn is_step_filled(&self, step: WizardStep) -> bool {
        match step {
            WizardStep::Identity => !self.username.trim().is_empty(),
            WizardStep::Vibe => {
                self.sliders != Sliders::default()
                    || !self.music_taste.trim().is_empty()
                    || self.aura_color != AuraColor::DRAFT_DEFAULT
            }
            WizardStep::Details => {
                !self.description.trim().is_empty()
                    || !self.red_flags.trim().is_empty()
                    || !self.looking_for.is_empty()
            }
            WizardStep::Prompts => self.prompts.iter().all(Prompt::is_answered),
        }
    }

    /// Snapshot the draft as a submission body.
    pub fn finalize(&self) -> FinalizedPersona {
        FinalizedPersona {
            username: self.username.trim().to_string(),
            age: self.age,
            gender: self.gender,
            aura_color: self.aura_color,
            prompts: self.prompts.clone(),
            sliders: self.sliders,
            bio_emojis: self.bio_emojis.clone(),
            music_taste: self.music_taste.clone(),
            description: self.description.clone(),
            red_flags: self.red_flags.clone(),
            looking_for: self.looking_for.clone(),
            tags: self.tags.clone(),
            blocked_users: Vec::new(),
        }
    }
}

/// The profile as sent to the backend on signup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalizedPersona {
    pub username: String,
    pub age: u32,
    pub gender: Gender,
    pub aura_color: AuraColor,
    pub prompts: Vec<Prompt>,
    pub sliders: Sliders,
    pub bio_emojis: String,
    pub music_taste: String,
    pub description: String,
    pub red_flags: String,
    pub looking_for: TagSet,
    pub tags: Vec<String>,
    /// Ids of users this account has blocked. Always empty at signup.
    #[serde(default)]
    pub blocked_users: Vec<String>,
}

impl FinalizedPersona {
    /// The persona as it will be displayed, with defaults for blank fields.
    pub fn to_persona(&self) -> Persona {
        let mut builder = Persona::builder()
            .username(self.username.clone())
            .age(self.age)
            .gender(self.gender)
            .aura_color(self.aura_color)
            .bio_emojis(self.bio_emojis.clone())
            .sliders(self.sliders)
            .music_taste(self.music_taste.clone())
            .red_flags(self.red_flags.clone())
            .looking_for(self.looking_for.iter().map(str::to_string))
            .description(self.description.clone());
        for prompt in &self.prompts {
            builder = builder.prompt(prompt.clone());
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auradeck_persona::{DEFAULT_USERNAME, SLIDER_DEFAULT, SLIDER_MAX, SLIDER_MIN};
    use proptest::prelude::*;

    #[test]
    fn fresh_draft_defaults() {
        let d = PersonaDraft::new();
        assert_eq!(d.username, "");
        assert_eq!(d.age, 20);
        assert_eq!(d.gender, Gender::NB);
        assert_eq!(d.aura_color, AuraColor::DRAFT_DEFAULT);
        assert!(d.looking_for().is_empty());
        assert_eq!(d.prompts().len(), 2);
        assert!(d.prompts().iter().all(|p| !p.is_answered()));
        for (_, score) in d.sliders().iter() {
            assert_eq!(score, SLIDER_DEFAULT);
        }
    }

    #[test]
    fn fields_know_their_step() {
        assert_eq!(DraftField::Age(30).step(), WizardStep::Identity);
        assert_eq!(
            DraftField::Slider { axis: PersonalityAxis::Humor, value: 3 }.step(),
            WizardStep::Vibe
        );
        assert_eq!(DraftField::RedFlags(String::new()).step(), WizardStep::Details);
        assert_eq!(
            DraftField::PromptAnswer { index: 0, answer: String::new() }.step(),
            WizardStep::Prompts
        );
    }

    #[test]
    fn slider_clamps_and_keeps_on_none() {
        let mut d = PersonaDraft::new();
        assert_eq!(d.set_slider(PersonalityAxis::Humor, Some(42)), SLIDER_MAX);
        assert_eq!(d.set_slider(PersonalityAxis::Humor, None), SLIDER_MAX);
        assert_eq!(d.set_slider(PersonalityAxis::Humor, Some(-3)), SLIDER_MIN);
        assert_eq!(d.set_slider(PersonalityAxis::SocialBattery, None), SLIDER_DEFAULT);
    }

    #[test]
    fn prompt_answer_out_of_range_is_noop() {
        let mut d = PersonaDraft::new();
        let before = d.clone();
        assert!(!d.apply(DraftField::PromptAnswer { index: 2, answer: "x".into() }));
        assert_eq!(d, before);
        assert!(d.apply(DraftField::PromptAnswer { index: 1, answer: "Tabs".into() }));
        assert_eq!(d.prompts()[1].question, DEFAULT_PROMPTS[1]);
        assert_eq!(d.prompts()[1].answer, "Tabs");
    }

    #[test]
    fn bio_is_capped() {
        let mut d = PersonaDraft::new();
        d.apply(DraftField::BioEmojis("\u{1f47e}\u{1f52e}\u{1f3b9}\u{1f30c}\u{1f355}\u{1f680}\u{1f3ae}\u{26a1}\u{1f3b8}".into()));
        assert_eq!(d.bio_emojis().chars().count(), BIO_EMOJI_MAX_CHARS);
    }

    #[test]
    fn looking_for_scenario() {
        let mut d = PersonaDraft::new();
        for tag in ["Gaming Buddy", "Casual", "Vibes Only"] {
            assert_eq!(d.toggle_looking_for(tag), ToggleOutcome::Added);
        }
        assert_eq!(d.toggle_looking_for("Adventure"), ToggleOutcome::Ignored);
        assert_eq!(d.looking_for().len(), 3);
        assert_eq!(d.toggle_looking_for("Casual"), ToggleOutcome::Removed);
        assert_eq!(d.looking_for().as_slice(), ["Gaming Buddy", "Vibes Only"]);
    }

    #[test]
    fn word_count_hint() {
        let mut d = PersonaDraft::new();
        d.description = "  night owl,  synth   nerd ".into();
        assert_eq!(d.description_word_count(), 4);
        assert!(d.description_word_count() < DESCRIPTION_WORD_HINT);
    }

    #[test]
    fn finalize_body_shape() {
        let mut d = PersonaDraft::new();
        d.apply(DraftField::Username("  NeonGhost ".into()));
        d.toggle_looking_for("Friends");
        let body = serde_json::to_value(d.finalize()).unwrap();
        for key in [
            "username", "age", "gender", "aura_color", "prompts", "sliders", "bio_emojis",
            "music_taste", "description", "red_flags", "looking_for", "tags", "blocked_users",
        ] {
            assert!(body.get(key).is_some(), "missing {key}");
        }
        assert_eq!(body["username"], "NeonGhost");
        assert_eq!(body["aura_color"], "#9333ea");
        assert_eq!(body["looking_for"], serde_json::json!(["Friends"]));
        assert_eq!(body["blocked_users"], serde_json::json!([]));
    }

    #[test]
    fn finalized_persona_displays_with_defaults() {
        let p = PersonaDraft::new().finalize().to_persona();
        assert_eq!(p.username, DEFAULT_USERNAME);
        assert_eq!(p.age, Some(DEFAULT_AGE));
        assert_eq!(p.red_flags, None);
        assert_eq!(p.prompts.len(), 2);
    }

    #[test]
    fn step_fill_flags() {
        let mut d = PersonaDraft::new();
        assert!(!d.is_step_filled(WizardStep::Identity));
        assert!(!d.is_step_filled(WizardStep::Vibe));
        d.apply(DraftField::Username("Ada".into()));
        d.apply(DraftField::Slider { axis: PersonalityAxis::Humor, value: 9 });
        assert!(d.is_step_filled(WizardStep::Identity));
        assert!(d.is_step_filled(WizardStep::Vibe));
    }

    proptest! {
        #[test]
        fn sliders_never_leave_range(
            values in prop::collection::vec(prop::option::of(any::<i32>()), 0..32)
        ) {
            let mut d = PersonaDraft::new();
            for (i, v) in values.into_iter().enumerate() {
                let axis = PersonalityAxis::ALL[i % PersonalityAxis::ALL.len()];
                let stored = d.set_slider(axis, v);
                prop_assert!((SLIDER_MIN..=SLIDER_MAX).contains(&stored));
                prop_assert_eq!(stored, d.sliders().get(axis));
            }
        }

        #[test]
        fn looking_for_never_exceeds_three(
            picks in prop::collection::vec(0usize..auradeck_persona::LOOKING_FOR_TAGS.len(), 0..64)
        ) {
            let mut d = PersonaDraft::new();
            for i in picks {
                d.toggle_looking_for(auradeck_persona::LOOKING_FOR_TAGS[i]);
                prop_assert!(d.looking_for().len() <= auradeck_persona::MAX_LOOKING_FOR);
            }
        }
    }
}
