//! Personality axes and slider scores.
//!
//! Every score is kept inside `[SLIDER_MIN, SLIDER_MAX]`. Values from the UI
//! or the backend are clamped on the way in, never rejected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PersonaError;

/// Lowest slider score.
pub const SLIDER_MIN: u8 = 1;

/// Highest slider score.
pub const SLIDER_MAX: u8 = 10;

/// Score of an untouched slider.
pub const SLIDER_DEFAULT: u8 = 5;

/// Clamp an arbitrary integer into the slider range.
pub fn clamp_score(value: i64) -> u8 {
    value.clamp(SLIDER_MIN as i64, SLIDER_MAX as i64) as u8
}

/// One named personality dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonalityAxis {
    SocialBattery,
    TextingStyle,
    PlanningStyle,
    Humor,
}

impl PersonalityAxis {
    /// All axes in display order.
    pub const ALL: [Self; 4] = [
        Self::SocialBattery,
        Self::TextingStyle,
        Self::PlanningStyle,
        Self::Humor,
    ];

    /// Wire name, as used by the backend.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::SocialBattery => "social_battery",
            Self::TextingStyle => "texting_style",
            Self::PlanningStyle => "planning_style",
            Self::Humor => "humor",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::SocialBattery => "Social Battery",
            Self::TextingStyle => "Texting Style",
            Self::PlanningStyle => "Planning",
            Self::Humor => "Humor",
        }
    }

    /// Captions for the low and high ends of the slider.
    pub const fn poles(&self) -> (&'static str, &'static str) {
        match self {
            Self::SocialBattery => ("Introvert", "Extrovert"),
            Self::TextingStyle => ("Dry", "Spammy"),
            Self::PlanningStyle => ("Go w/ Flow", "Itinerary"),
            Self::Humor => ("Dark", "Silly"),
        }
    }
}

impl fmt::Display for PersonalityAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PersonalityAxis {
    type Err = PersonaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|axis| axis.key() == s)
            .ok_or_else(|| PersonaError::UnknownAxis(s.to_string()))
    }
}

/// Scores for the four personality axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SliderScores")]
pub struct Sliders {
    social_battery: u8,
    texting_style: u8,
    planning_style: u8,
    humor: u8,
}

impl Default for Sliders {
    fn default() -> Self {
        Self::uniform(SLIDER_DEFAULT)
    }
}

impl Sliders {
    /// All four axes at the same (clamped) score.
    pub fn uniform(score: u8) -> Self {
        let s = clamp_score(score as i64);
        Self {
            social_battery: s,
            texting_style: s,
            planning_style: s,
            humor: s,
        }
    }

    pub fn get(&self, axis: PersonalityAxis) -> u8 {
        match axis {
            PersonalityAxis::SocialBattery => self.social_battery,
            PersonalityAxis::TextingStyle => self.texting_style,
            PersonalityAxis::PlanningStyle => self.planning_style,
            PersonalityAxis::Humor => self.humor,
        }
    }

    /// Store a score, clamped into range. Returns the stored value.
    pub fn set(&mut self, axis: PersonalityAxis, value: i64) -> u8 {
        let v = clamp_score(value);
        *self.slot_mut(axis) = v;
        v
    }

    /// Builder: set one axis.
    pub fn with(mut self, axis: PersonalityAxis, value: i64) -> Self {
        self.set(axis, value);
        self
    }

    /// `(axis, score)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (PersonalityAxis, u8)> + '_ {
        PersonalityAxis::ALL.into_iter().map(move |axis| (axis, self.get(axis)))
    }

    fn slot_mut(&mut self, axis: PersonalityAxis) -> &mut u8 {
        match axis {
            PersonalityAxis::SocialBattery => &mut self.social_battery,
            PersonalityAxis::TextingStyle => &mut self.texting_style,
            PersonalityAxis::PlanningStyle => &mut self.planning_style,
            PersonalityAxis::Humor => &mut self.humor,
        }
    }
}

/// Lenient wire shape: missing scores fall back to the default, out-of-range
/// scores are clamped.
#[derive(Deserialize)]
struct SliderScores {
    social_battery: Option<i64>,
    texting_style: Option<i64>,
    planning_style: Option<i64>,
    humor: Option<i64>,
}

impl From<SliderScores> for Sliders {
    fn from(raw: SliderScores) -> Self {
        let score = |v: Option<i64>| v.map(clamp_score).unwrap_or(SLIDER_DEFAULT);
        Self {
            social_battery: score(raw.social_battery),
            texting_style: score(raw.texting_style),
            planning_style: score(raw.planning_style),
            humor: score(raw.humor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn defaults_are_five() {
        let s = Sliders::default();
        assert!(s.iter().all(|(_, v)| v == SLIDER_DEFAULT));
    }

    #[test]
    fn set_clamps_both_ends() {
        let mut s = Sliders::default();
        assert_eq!(s.set(PersonalityAxis::Humor, 42), 10);
        assert_eq!(s.set(PersonalityAxis::Humor, -3), 1);
        assert_eq!(s.set(PersonalityAxis::Humor, 7), 7);
        assert_eq!(s.get(PersonalityAxis::Humor), 7);
        assert_eq!(s.get(PersonalityAxis::SocialBattery), SLIDER_DEFAULT);
    }

    #[test]
    fn axis_keys_round_trip_through_from_str() {
        for axis in PersonalityAxis::ALL {
            assert_eq!(axis.key().parse::<PersonalityAxis>(), Ok(axis));
        }
        assert!("vibes".parse::<PersonalityAxis>().is_err());
    }

    #[test]
    fn lenient_deserialize() {
        let s: Sliders =
            serde_json::from_str(r#"{"social_battery": 3, "texting_style": 99, "humor": 0}"#).unwrap();
        assert_eq!(s.get(PersonalityAxis::SocialBattery), 3);
        assert_eq!(s.get(PersonalityAxis::TextingStyle), 10);
        assert_eq!(s.get(PersonalityAxis::PlanningStyle), SLIDER_DEFAULT);
        assert_eq!(s.get(PersonalityAxis::Humor), 1);
    }

    #[test]
    fn serializes_backend_keys() {
        let s = Sliders::default().with(PersonalityAxis::PlanningStyle, 8);
        let v = serde_json::to_value(s).unwrap();
        assert_eq!(v["planning_style"], 8);
        assert_eq!(v["social_battery"], 5);
    }

    proptest! {
        #[test]
        fn score_always_in_range(value in any::<i64>()) {
            let mut s = Sliders::default();
            let stored = s.set(PersonalityAxis::TextingStyle, value);
            prop_assert!((SLIDER_MIN..=SLIDER_MAX).contains(&stored));
        }
    }
}
