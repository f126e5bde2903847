//! Persona model and the single place display defaults are applied.
//!
//! The backend hands back loosely-typed records where any field may be
//! missing. [`Persona::from_record`] (or [`PersonaBuilder`]) is the only way to
//! turn one into a displayable persona, so every view agrees on the defaults.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::aura::AuraColor;
use crate::axes::Sliders;
use crate::error::PersonaError;
use crate::tags::TagSet;

/// Shown for personas without a display name.
pub const DEFAULT_USERNAME: &str = "Mystery Soul";

/// Shown for personas without an emoji bio.
pub const DEFAULT_BIO_EMOJI: &str = "\u{1f47b}";

/// Shown for personas without a music taste.
pub const DEFAULT_MUSIC_TASTE: &str = "Silence";

/// Self-declared gender tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Gender {
    M,
    F,
    #[default]
    NB,
}

impl Gender {
    pub const ALL: [Self; 3] = [Self::M, Self::F, Self::NB];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::M => "M",
            Self::F => "F",
            Self::NB => "NB",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = PersonaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PersonaError::InvalidGender(s.to_string()))
    }
}

/// A question with the persona's answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub question: String,
    pub answer: String,
}

impl Prompt {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// An unanswered prompt.
    pub fn open(question: impl Into<String>) -> Self {
        Self::new(question, String::new())
    }

    pub fn is_answered(&self) -> bool {
        !self.answer.trim().is_empty()
    }
}

/// Persona as it arrives from the backend: every field optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonaRecord {
    pub username: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    pub aura_color: Option<AuraColor>,
    pub bio_emojis: Option<String>,
    pub sliders: Option<Sliders>,
    pub prompts: Option<Vec<Prompt>>,
    pub music_taste: Option<String>,
    pub red_flags: Option<String>,
    pub looking_for: Option<TagSet>,
    pub description: Option<String>,
}

/// A fully-populated persona, ready to display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Persona {
    pub username: String,
    /// `None` renders as "?".
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    pub aura_color: AuraColor,
    pub bio_emojis: String,
    pub sliders: Sliders,
    pub prompts: Vec<Prompt>,
    pub music_taste: String,
    /// Empty or whitespace-only red flags are normalised to `None`.
    pub red_flags: Option<String>,
    pub looking_for: TagSet,
    pub description: String,
}

impl Default for Persona {
    fn default() -> Self {
        PersonaBuilder::new().build()
    }
}

impl Persona {
    /// Apply display defaults to a backend record.
    pub fn from_record(record: PersonaRecord) -> Self {
        PersonaBuilder::from_record(record).build()
    }

    pub fn builder() -> PersonaBuilder {
        PersonaBuilder::new()
    }

    /// The emoji shown in the avatar bubble: first token of the bio.
    pub fn headline_emoji(&self) -> &str {
        self.bio_emojis
            .split_whitespace()
            .next()
            .unwrap_or(DEFAULT_BIO_EMOJI)
    }

    /// Age as rendered on the card.
    pub fn age_label(&self) -> String {
        self.age.map_or_else(|| "?".to_string(), |a| a.to_string())
    }
}

/// Builder that owns the persona defaults policy.
#[derive(Debug, Clone, Default)]
pub struct PersonaBuilder {
    record: PersonaRecord,
}

impl PersonaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_record(record: PersonaRecord) -> Self {
        Self { record }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.record.username = Some(username.into());
        self
    }

    pub fn age(mut self, age: u32) -> Self {
        self.record.age = Some(age);
        self
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.record.gender = Some(gender);
        self
    }

    pub fn aura_color(mut self, color: AuraColor) -> Self {
        self.record.aura_color = Some(color);
        self
    }

    pub fn bio_emojis(mut self, bio: impl Into<String>) -> Self {
        self.record.bio_emojis = Some(bio.into());
        self
    }

    pub fn sliders(mut self, sliders: Sliders) -> Self {
        self.record.sliders = Some(sliders);
        self
    }

    pub fn prompt(mut self, prompt: Prompt) -> Self {
        self.record.prompts.get_or_insert_with(Vec::new).push(prompt);
        self
    }

    pub fn music_taste(mut self, music: impl Into<String>) -> Self {
        self.record.music_taste = Some(music.into());
        self
    }

    pub fn red_flags(mut self, flags: impl Into<String>) -> Self {
        self.record.red_flags = Some(flags.into());
        self
    }

    pub fn looking_for<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.record.looking_for = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.record.description = Some(description.into());
        self
    }

    pub fn build(self) -> Persona {
        let r = self.record;
        Persona {
            username: non_blank(r.username).unwrap_or_else(|| DEFAULT_USERNAME.to_string()),
            age: r.age,
            gender: r.gender,
            aura_color: r.aura_color.unwrap_or(AuraColor::DISPLAY_DEFAULT),
            bio_emojis: non_blank(r.bio_emojis).unwrap_or_else(|| DEFAULT_BIO_EMOJI.to_string()),
            sliders: r.sliders.unwrap_or_default(),
            prompts: r.prompts.unwrap_or_default(),
            music_taste: non_blank(r.music_taste).unwrap_or_else(|| DEFAULT_MUSIC_TASTE.to_string()),
            red_flags: non_blank(r.red_flags),
            looking_for: r.looking_for.unwrap_or_default(),
            description: r.description.unwrap_or_default(),
        }
    }
}

fn non_blank(s: Option<String>) -> Option<String> {
    s.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axes::{PersonalityAxis, SLIDER_DEFAULT};

    #[test]
    fn empty_record_gets_every_default() {
        let p = Persona::from_record(PersonaRecord::default());
        assert_eq!(p.username, DEFAULT_USERNAME);
        assert_eq!(p.age_label(), "?");
        assert_eq!(p.gender, None);
        assert_eq!(p.aura_color, AuraColor::DISPLAY_DEFAULT);
        assert_eq!(p.bio_emojis, DEFAULT_BIO_EMOJI);
        assert_eq!(p.sliders.get(PersonalityAxis::Humor), SLIDER_DEFAULT);
        assert!(p.prompts.is_empty());
        assert_eq!(p.music_taste, DEFAULT_MUSIC_TASTE);
        assert_eq!(p.red_flags, None);
        assert!(p.looking_for.is_empty());
        assert_eq!(p.description, "");
    }

    #[test]
    fn blank_red_flags_are_hidden() {
        let p = Persona::builder().red_flags("   ").build();
        assert_eq!(p.red_flags, None);
        let p = Persona::builder().red_flags("I judge coffee orders.").build();
        assert_eq!(p.red_flags.as_deref(), Some("I judge coffee orders."));
    }

    #[test]
    fn record_from_partial_json() {
        let record: PersonaRecord = serde_json::from_str(
            r##"{"username": "NeonGhost", "aura_color": "#7B1FA2", "gender": "NB", "looking_for": ["Rave Buddy", "Vibes"]}"##,
        )
        .unwrap();
        let p = Persona::from_record(record);
        assert_eq!(p.username, "NeonGhost");
        assert_eq!(p.aura_color.to_hex(), "#7b1fa2");
        assert_eq!(p.gender, Some(Gender::NB));
        assert_eq!(p.looking_for.as_slice(), ["Rave Buddy", "Vibes"]);
        assert_eq!(p.music_taste, DEFAULT_MUSIC_TASTE);
    }

    #[test]
    fn headline_emoji_takes_first_token() {
        let p = Persona::builder().bio_emojis("\u{1f47e} \u{1f52e} \u{1f3b9}").build();
        assert_eq!(p.headline_emoji(), "\u{1f47e}");
        assert_eq!(Persona::default().headline_emoji(), DEFAULT_BIO_EMOJI);
    }

    #[test]
    fn gender_parse() {
        assert_eq!("nb".parse::<Gender>(), Ok(Gender::NB));
        assert_eq!(" F ".parse::<Gender>(), Ok(Gender::F));
        assert!("X".parse::<Gender>().is_err());
    }
}
