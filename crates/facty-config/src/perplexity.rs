//! Retrieval-augmented chat-completion service configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default chat-completions endpoint.
fn default_endpoint() -> String {
    String::from("https://api.perplexity.ai/chat/completions")
}

const fn default_extraction_timeout_secs() -> u64 {
    60
}

const fn default_verification_timeout_secs() -> u64 {
    60
}

/// The single-pass call covers the whole article, so it gets a longer budget.
const fn default_aggregate_timeout_secs() -> u64 {
    120
}

#[derive(Clone, Deserialize, Serialize)]
pub struct PerplexityConfig {
    /// API credential sent as a bearer token.
    #[serde(default)]
    pub api_key: String,

    /// Chat-completions endpoint URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Timeout for claim extraction calls, in seconds.
    #[serde(default = "default_extraction_timeout_secs")]
    pub extraction_timeout_secs: u64,

    /// Timeout for each per-claim verification call, in seconds.
    #[serde(default = "default_verification_timeout_secs")]
    pub verification_timeout_secs: u64,

    /// Timeout for the single-pass verification call, in seconds.
    #[serde(default = "default_aggregate_timeout_secs")]
    pub aggregate_timeout_secs: u64,
}

impl Default for PerplexityConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: default_endpoint(),
            extraction_timeout_secs: default_extraction_timeout_secs(),
            verification_timeout_secs: default_verification_timeout_secs(),
            aggregate_timeout_secs: default_aggregate_timeout_secs(),
        }
    }
}

// Hand-written so the credential never reaches logs.
impl std::fmt::Debug for PerplexityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PerplexityConfig")
            .field("api_key", &if self.api_key.is_empty() { "" } else { "***" })
            .field("endpoint", &self.endpoint)
            .field("extraction_timeout_secs", &self.extraction_timeout_secs)
            .field("verification_timeout_secs", &self.verification_timeout_secs)
            .field("aggregate_timeout_secs", &self.aggregate_timeout_secs)
            .finish()
    }
}

impl PerplexityConfig {
    /// Check if a non-blank API key is present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    #[must_use]
    pub const fn extraction_timeout(&self) -> Duration {
        Duration::from_secs(self.extraction_timeout_secs)
    }

    #[must_use]
    pub const fn verification_timeout(&self) -> Duration {
        Duration::from_secs(self.verification_timeout_secs)
    }

    #[must_use]
    pub const fn aggregate_timeout(&self) -> Duration {
        Duration::from_secs(self.aggregate_timeout_secs)
    }
}
