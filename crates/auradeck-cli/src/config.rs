//! Client configuration from the environment.

use auradeck_deck::DeckConfig;
use auradeck_wizard::{ValidationPolicy, WizardConfig, WizardLayout};

use crate::error::{Error, Result};

/// Default tracing filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "auradeck=info";

/// Everything the client reads from its environment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    pub wizard: WizardConfig,
    pub deck: DeckConfig,
}

impl AppConfig {
    /// Read `AURADECK_LAYOUT`, `AURADECK_STRICT` and
    /// `AURADECK_DECISION_THRESHOLD`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("AURADECK_LAYOUT") {
            let layout: WizardLayout = raw.parse().map_err(|_| Error::InvalidEnv {
                var: "AURADECK_LAYOUT",
                value: raw.clone(),
            })?;
            config.wizard = config.wizard.with_layout(layout);
        }

        if let Some(raw) = lookup("AURADECK_STRICT") {
            if parse_flag(&raw).ok_or_else(|| Error::InvalidEnv {
                var: "AURADECK_STRICT",
                value: raw.clone(),
            })? {
                config.wizard = config.wizard.with_policy(ValidationPolicy::strict());
            }
        }

        if let Some(raw) = lookup("AURADECK_DECISION_THRESHOLD") {
            let threshold = raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|t| t.is_finite() && *t > 0.0)
                .ok_or_else(|| Error::InvalidEnv {
                    var: "AURADECK_DECISION_THRESHOLD",
                    value: raw.clone(),
                })?;
            config.deck = config.deck.with_decision_threshold(threshold);
        }

        Ok(config)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
