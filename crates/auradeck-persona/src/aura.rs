//! Aura colors.
//!
//! Profiles carry no photos. The aura color is the only visual identity cue,
//! so it is validated once at the boundary and stored as raw RGB.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{PersonaError, Result};

/// A validated `#RRGGBB` color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AuraColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl AuraColor {
    /// Default color of a fresh onboarding draft.
    pub const DRAFT_DEFAULT: Self = Self::rgb(0x93, 0x33, 0xea);

    /// Fallback shown for personas that never picked a color.
    pub const DISPLAY_DEFAULT: Self = Self::rgb(0xa8, 0x55, 0xf7);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (case-insensitive, leading `#` required).
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || PersonaError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Lower-case `#rrggbb` form.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// The palette entry for this color, if it is one of the selectable ones.
    pub fn palette_entry(&self) -> Option<&'static PaletteEntry> {
        PALETTE.iter().find(|entry| entry.color == *self)
    }
}

impl Default for AuraColor {
    fn default() -> Self {
        Self::DRAFT_DEFAULT
    }
}

impl fmt::Display for AuraColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for AuraColor {
    type Err = PersonaError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for AuraColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for AuraColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// One selectable swatch in the aura picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub name: &'static str,
    pub color: AuraColor,
    /// Light swatches need a dark check mark.
    pub dark_contrast: bool,
}

/// The eight selectable aura colors, in picker order.
pub const PALETTE: [PaletteEntry; 8] = [
    PaletteEntry { name: "Red", color: AuraColor::rgb(0xef, 0x44, 0x44), dark_contrast: false },
    PaletteEntry { name: "Orange", color: AuraColor::rgb(0xf9, 0x73, 0x16), dark_contrast: false },
    PaletteEntry { name: "Yellow", color: AuraColor::rgb(0xea, 0xb3, 0x08), dark_contrast: true },
    PaletteEntry { name: "Green", color: AuraColor::rgb(0x22, 0xc5, 0x5e), dark_contrast: false },
    PaletteEntry { name: "Blue", color: AuraColor::rgb(0x3b, 0x82, 0xf6), dark_contrast: false },
    PaletteEntry { name: "Purple", color: AuraColor::rgb(0x93, 0x33, 0xea), dark_contrast: false },
    PaletteEntry { name: "Pink", color: AuraColor::rgb(0xec, 0x48, 0x99), dark_contrast: false },
    PaletteEntry { name: "White", color: AuraColor::rgb(0xff, 0xff, 0xff), dark_contrast: true },
];
