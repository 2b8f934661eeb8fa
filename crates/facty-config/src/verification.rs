//! Verification options shared by the extractor, verifiers and compiler.

use std::time::Duration;

use facty_core::enums::RecencyWindow;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_model() -> String {
    String::from("sonar-pro")
}

const fn default_max_claims() -> usize {
    10
}

const fn default_multistep_enabled() -> bool {
    true
}

const fn default_claim_delay_ms() -> u64 {
    300
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerificationConfig {
    /// Reasoning model identifier sent with every request.
    #[serde(default = "default_model")]
    pub model: String,

    /// How far back retrieval may draw sources from.
    #[serde(default)]
    pub recency_window: RecencyWindow,

    /// Upper bound on claims extracted and verified per article.
    #[serde(default = "default_max_claims")]
    pub max_claims: usize,

    /// Per-claim multi-step mode when true, single-pass aggregate mode otherwise.
    #[serde(default = "default_multistep_enabled")]
    pub multistep_enabled: bool,

    /// Minimum spacing between successive per-claim calls, in milliseconds.
    #[serde(default = "default_claim_delay_ms")]
    pub claim_delay_ms: u64,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            recency_window: RecencyWindow::default(),
            max_claims: default_max_claims(),
            multistep_enabled: default_multistep_enabled(),
            claim_delay_ms: default_claim_delay_ms(),
        }
    }
}

impl VerificationConfig {
    #[must_use]
    pub const fn claim_delay(&self) -> Duration {
        Duration::from_millis(self.claim_delay_ms)
    }

    /// Reject values the pipeline cannot run with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a zero claim cap or a blank
    /// model identifier.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_claims == 0 {
            return Err(ConfigError::InvalidValue {
                field: "verification.max_claims".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.model.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "verification.model".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
