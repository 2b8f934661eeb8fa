//! Evidence extraction: article text to a bounded list of claims.

use std::time::Duration;

use chrono::NaiveDate;
use facty_client::{ChatRequest, ChatTransport};
use facty_core::Claim;
use facty_core::enums::{ClaimKind, Priority};
use serde_json::Value;

use crate::normalize::{self, Object};
use crate::prompts;
use crate::settings::CheckSettings;

const TEMPERATURE: f32 = 0.1;
const MAX_TOKENS: u32 = 2000;

/// Turns article text into atomic, independently checkable claims.
#[derive(Debug, Clone)]
pub struct ClaimExtractor {
    model: String,
    max_claims: usize,
    timeout: Duration,
}

impl ClaimExtractor {
    #[must_use]
    pub fn new(settings: &CheckSettings) -> Self {
        Self {
            model: settings.model.clone(),
            max_claims: settings.max_claims,
            timeout: settings.extraction_timeout,
        }
    }

    #[must_use]
    pub fn request(&self, article: &str, today: NaiveDate) -> ChatRequest {
        let (system, user) = prompts::extraction(article, today, self.max_claims);
        ChatRequest::new(&self.model, system, user)
            .temperature(TEMPERATURE)
            .max_tokens(MAX_TOKENS)
            .timeout(self.timeout)
    }

    /// Extract up to `max_claims` claims.
    ///
    /// Never fails: a transport error, error status or unreadable payload
    /// yields no claims, which the pipeline treats as nothing to verify.
    pub async fn extract<T: ChatTransport>(
        &self,
        transport: &T,
        article: &str,
        today: NaiveDate,
    ) -> Vec<Claim> {
        let completion = match transport.complete(&self.request(article, today)).await {
            Ok(completion) => completion,
            Err(e) => {
                tracing::warn!(%e, "claim extraction request failed");
                return Vec::new();
            }
        };

        let map = match normalize::parse_object(&completion.content) {
            Ok(map) => map,
            Err(e) => {
                tracing::warn!(%e, "claim extraction payload unreadable");
                return Vec::new();
            }
        };

        let claims = claims_from(&map, self.max_claims);
        tracing::debug!(count = claims.len(), "claims extracted");
        claims
    }
}

/// Read the `claims` array, dropping blank entries, then cap it.
///
/// Entries may be objects (`{claim, type, priority}`) or bare strings.
/// Unknown types become general facts and unknown priorities medium.
#[must_use]
pub fn claims_from(map: &Object, max_claims: usize) -> Vec<Claim> {
    if !map.get("claims").is_some_and(Value::is_array) {
        tracing::warn!("claim extraction payload has no claims array");
        return Vec::new();
    }

    normalize::array(map, "claims")
        .iter()
        .filter_map(|entry| match entry {
            Value::String(text) => {
                Claim::new(text.as_str(), ClaimKind::default(), Priority::default()).ok()
            }
            Value::Object(obj) => {
                let text = normalize::text(obj, "claim")?;
                let kind = normalize::text(obj, "type")
                    .and_then(|t| ClaimKind::parse(&t))
                    .unwrap_or_default();
                let priority = normalize::text(obj, "priority")
                    .and_then(|p| Priority::parse(&p))
                    .unwrap_or_default();
                Claim::new(text, kind, priority).ok()
            }
            _ => None,
        })
        .take(max_claims)
        .collect()
}
