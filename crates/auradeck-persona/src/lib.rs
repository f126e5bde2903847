//! Auradeck Persona Model
//!
//! Shared data types for the discovery client: the persona a user builds
//! during onboarding and the candidates they browse in the deck.
//!
//! # Photo-less identity
//!
//! Profiles carry no pictures. Identity is conveyed through text and a single
//! [`AuraColor`], plus four personality sliders scored 1 to 10.
//!
//! # Defaults
//!
//! Backend records are duck-typed. All display defaults are applied in one
//! place, [`PersonaBuilder::build`], rather than per view.

mod aura;
mod axes;
mod candidate;
mod error;
mod persona;
mod tags;

pub use aura::{AuraColor, PaletteEntry, PALETTE};
pub use axes::{clamp_score, PersonalityAxis, Sliders, SLIDER_DEFAULT, SLIDER_MAX, SLIDER_MIN};
pub use candidate::{Candidate, CandidateId, CandidateRecord};
pub use error::{PersonaError, Result};
pub use persona::{
    Gender, Persona, PersonaBuilder, PersonaRecord, Prompt, DEFAULT_BIO_EMOJI, DEFAULT_MUSIC_TASTE,
    DEFAULT_USERNAME,
};
pub use tags::{TagSet, ToggleOutcome, LOOKING_FOR_TAGS, MAX_LOOKING_FOR};
