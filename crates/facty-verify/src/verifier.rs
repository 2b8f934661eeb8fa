//! Per-claim verification.
//!
//! One search-backed call per claim. Whatever goes wrong, the result is a
//! [`Verdict`]: failures become `unverified` verdicts whose explanation
//! names the failure, never `factual_error`.

use std::time::Duration;

use chrono::NaiveDate;
use facty_client::{ChatCompletion, ChatRequest, ChatTransport, ClientError};
use facty_core::{Citation, Verdict};
use facty_core::enums::{ClaimKind, Confidence, IssueType, RecencyWindow};
use serde_json::Value;

use crate::normalize::{self, Object};
use crate::prompts;
use crate::settings::CheckSettings;
use crate::sources::{VERDICT_SOURCE_CAP, dedup_citations};

const TEMPERATURE: f32 = 0.2;
const MAX_TOKENS: u32 = 1500;

pub const EMPTY_CLAIM: &str = "Unknown claim";
pub const EMPTY_CLAIM_EXPLANATION: &str = "Claim was empty or invalid";
pub const NO_EXPLANATION: &str = "No explanation provided";
pub const PARSE_FAILURE: &str = "Failed to parse verification result";

/// Explanation recorded when the service call itself fails.
#[must_use]
pub fn failure_explanation(error: &ClientError) -> &'static str {
    match error {
        ClientError::Http(_) | ClientError::MissingApiKey => "API error during verification",
        ClientError::Api { .. } | ClientError::RateLimited { .. } => {
            "HTTP error during verification"
        }
        ClientError::InvalidResponse(_) => "Invalid response format",
    }
}

/// Verifies one claim at a time against recent sources.
#[derive(Debug, Clone)]
pub struct ClaimVerifier {
    model: String,
    window: RecencyWindow,
    timeout: Duration,
}

impl ClaimVerifier {
    #[must_use]
    pub fn new(settings: &CheckSettings) -> Self {
        Self {
            model: settings.model.clone(),
            window: settings.recency_window,
            timeout: settings.verification_timeout,
        }
    }

    #[must_use]
    pub fn request(&self, claim: &str, kind: ClaimKind, today: NaiveDate) -> ChatRequest {
        let (system, user) = prompts::claim_verification(claim, kind, today, self.window);
        ChatRequest::new(&self.model, system, user)
            .temperature(TEMPERATURE)
            .max_tokens(MAX_TOKENS)
            .with_search(self.window)
            .timeout(self.timeout)
    }

    /// Verify one claim. A blank claim is answered without any service call.
    pub async fn verify<T: ChatTransport>(
        &self,
        transport: &T,
        claim: &str,
        kind: ClaimKind,
        today: NaiveDate,
    ) -> Verdict {
        let claim = claim.trim();
        if claim.is_empty() {
            return Verdict::unverified(EMPTY_CLAIM, EMPTY_CLAIM_EXPLANATION);
        }

        tracing::debug!(claim, kind = %kind, "verifying claim");
        match transport.complete(&self.request(claim, kind, today)).await {
            Ok(completion) => verdict_from(claim, &completion),
            Err(e) => {
                tracing::warn!(%e, claim, "claim verification failed");
                Verdict::unverified(claim, failure_explanation(&e))
            }
        }
    }
}

/// Build a verdict from the service's answer for `claim`.
#[must_use]
pub fn verdict_from(claim: &str, completion: &ChatCompletion) -> Verdict {
    match normalize::parse_object(&completion.content) {
        Ok(parsed) => {
            let map = normalize::with_defaults(defaults(claim), parsed);
            verdict_from_object(claim, &map, &completion.citations)
        }
        Err(e) => {
            tracing::warn!(%e, claim, "verification payload unreadable");
            Verdict::unverified(claim, PARSE_FAILURE)
        }
    }
}

/// Field defaults for a verification payload. `issue_type` is left out so an
/// absent value can follow the accuracy flag.
fn defaults(claim: &str) -> Object {
    let mut map = Object::new();
    map.insert("claim".into(), Value::from(claim));
    map.insert("is_accurate".into(), Value::Bool(false));
    map.insert("confidence".into(), Value::from(Confidence::Low.as_str()));
    map.insert("explanation".into(), Value::from(NO_EXPLANATION));
    map.insert("sources".into(), Value::Array(Vec::new()));
    map
}

fn verdict_from_object(claim: &str, map: &Object, native: &[Citation]) -> Verdict {
    let is_accurate = normalize::flag(map, "is_accurate").unwrap_or(false);
    let confidence = normalize::text(map, "confidence")
        .and_then(|c| Confidence::parse(&c))
        .unwrap_or(Confidence::Low);
    // Absent: follows the accuracy flag. Unrecognized: unverified.
    let issue_type = match normalize::text(map, "issue_type") {
        Some(raw) => IssueType::parse(&raw).unwrap_or(IssueType::Unverified),
        None if is_accurate => IssueType::None,
        None => IssueType::Unverified,
    };

    let listed = normalize::citations(normalize::array(map, "sources"));
    let sources = dedup_citations(native.iter().cloned().chain(listed), VERDICT_SOURCE_CAP);

    // Present-but-blank text survives the merge; the verdict still needs it.
    Verdict {
        claim: normalize::non_blank(map, "claim").unwrap_or_else(|| claim.to_string()),
        is_accurate,
        verdict_label: None,
        confidence,
        issue_type,
        explanation: normalize::non_blank(map, "explanation")
            .unwrap_or_else(|| NO_EXPLANATION.to_string()),
        actual_facts: normalize::non_blank(map, "actual_facts"),
        why_it_matters: normalize::non_blank(map, "why_it_matters"),
        sources,
    }
}
