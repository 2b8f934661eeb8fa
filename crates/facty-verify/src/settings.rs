use std::time::Duration;

use facty_config::FactyConfig;
use facty_core::enums::{RecencyWindow, VerificationMode};

/// Immutable options for one fact-checker, shared by every stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckSettings {
    pub model: String,
    pub recency_window: RecencyWindow,
    pub max_claims: usize,
    pub mode: VerificationMode,
    pub claim_delay: Duration,
    pub extraction_timeout: Duration,
    pub verification_timeout: Duration,
    pub aggregate_timeout: Duration,
}

impl Default for CheckSettings {
    fn default() -> Self {
        Self::from(&FactyConfig::default())
    }
}

impl From<&FactyConfig> for CheckSettings {
    fn from(config: &FactyConfig) -> Self {
        let verification = &config.verification;
        let perplexity = &config.perplexity;
        Self {
            model: verification.model.clone(),
            recency_window: verification.recency_window,
            max_claims: verification.max_claims,
            mode: if verification.multistep_enabled {
                VerificationMode::PerClaim
            } else {
                VerificationMode::Aggregate
            },
            claim_delay: verification.claim_delay(),
            extraction_timeout: perplexity.extraction_timeout(),
            verification_timeout: perplexity.verification_timeout(),
            aggregate_timeout: perplexity.aggregate_timeout(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_config_defaults() {
        let settings = CheckSettings::default();
        assert_eq!(settings.model, "sonar-pro");
        assert_eq!(settings.max_claims, 10);
        assert_eq!(settings.mode, VerificationMode::PerClaim);
        assert_eq!(settings.claim_delay, Duration::from_millis(300));
        assert_eq!(settings.aggregate_timeout, Duration::from_secs(120));
    }

    #[test]
    fn multistep_off_selects_aggregate() {
        let mut config = FactyConfig::default();
        config.verification.multistep_enabled = false;
        config.verification.recency_window = RecencyWindow::Day;
        let settings = CheckSettings::from(&config);
        assert_eq!(settings.mode, VerificationMode::Aggregate);
        assert_eq!(settings.recency_window, RecencyWindow::Day);
    }
}
