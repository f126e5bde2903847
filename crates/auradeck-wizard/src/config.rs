//! Wizard configuration.

use serde::{Deserialize, Serialize};

use crate::policy::ValidationPolicy;
use crate::step::WizardLayout;

/// Configuration for a [`WizardEngine`](crate::WizardEngine).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WizardConfig {
    /// Which steps to show.
    pub layout: WizardLayout,

    /// Required-field checks.
    pub policy: ValidationPolicy,
}

impl WizardConfig {
    /// Three steps, no prompts page.
    #[must_use]
    pub fn compact() -> Self {
        Self {
            layout: WizardLayout::Compact,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_layout(mut self, layout: WizardLayout) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }
}
