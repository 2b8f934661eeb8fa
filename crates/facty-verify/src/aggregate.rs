//! Single-pass verification.
//!
//! One call identifies and verifies the article's claims and returns a
//! report-shaped payload. The payload is normalized field by field; when it
//! cannot be read at all, the result is a degraded "Analysis Incomplete"
//! report that still carries the natively surfaced citations.

use std::time::Duration;

use chrono::NaiveDate;
use facty_client::{ChatCompletion, ChatRequest, ChatTransport};
use facty_core::enums::{
    Confidence, IssueKind, RecencyWindow, ReportStatus, VerdictLabel, VerificationMode,
};
use facty_core::{Citation, Issue, Report, Verdict, VerifiedFact};
use serde_json::Value;

use crate::compiler::{DEFAULT_ACTUAL_FACTS, DEFAULT_PROBLEM, DEFAULT_WHY_IT_MATTERS};
use crate::normalize::{self, Object};
use crate::prompts;
use crate::settings::CheckSettings;
use crate::sources::{REPORT_SOURCE_CAP, VERDICT_SOURCE_CAP, dedup_citations};
use crate::verifier::NO_EXPLANATION;

const TEMPERATURE: f32 = 0.2;
const MAX_TOKENS: u32 = 6000;

pub const INCOMPLETE_SCORE: u8 = 50;
pub const INCOMPLETE_DESCRIPTION: &str = "Analysis completed but response format was invalid.";
const NO_DESCRIPTION: &str = "No description provided";

/// Checks a whole article in one search-backed call.
#[derive(Debug, Clone)]
pub struct AggregateVerifier {
    model: String,
    window: RecencyWindow,
    timeout: Duration,
}

impl AggregateVerifier {
    #[must_use]
    pub fn new(settings: &CheckSettings) -> Self {
        Self {
            model: settings.model.clone(),
            window: settings.recency_window,
            timeout: settings.aggregate_timeout,
        }
    }

    #[must_use]
    pub fn request(&self, article: &str, today: NaiveDate) -> ChatRequest {
        let (system, user) = prompts::aggregate(article, today, self.window);
        ChatRequest::new(&self.model, system, user)
            .temperature(TEMPERATURE)
            .max_tokens(MAX_TOKENS)
            .with_search(self.window)
            .timeout(self.timeout)
    }

    /// Verify the whole article. Never fails; see the module docs.
    pub async fn verify_all<T: ChatTransport>(
        &self,
        transport: &T,
        article: &str,
        today: NaiveDate,
    ) -> Report {
        match transport.complete(&self.request(article, today)).await {
            Ok(completion) => report_from(&completion),
            Err(e) => {
                tracing::warn!(%e, "single-pass verification request failed");
                incomplete_report(Vec::new())
            }
        }
    }
}

/// The degraded report used when the payload is unusable.
#[must_use]
pub fn incomplete_report(native: Vec<Citation>) -> Report {
    let mut report = Report::empty(
        INCOMPLETE_SCORE,
        ReportStatus::AnalysisIncomplete,
        INCOMPLETE_DESCRIPTION,
        VerificationMode::Aggregate,
    );
    report.sources = dedup_citations(native, REPORT_SOURCE_CAP);
    report
}

/// Normalize a single-pass payload into a report.
#[must_use]
pub fn report_from(completion: &ChatCompletion) -> Report {
    let map = match normalize::parse_object(&completion.content) {
        Ok(map) => map,
        Err(e) => {
            tracing::warn!(%e, "single-pass payload unreadable");
            return incomplete_report(completion.citations.clone());
        }
    };

    let score = normalize::clamp_score(map.get("score"));
    let status = normalize::text(&map, "status")
        .and_then(|s| ReportStatus::parse(&s))
        .unwrap_or_else(|| ReportStatus::from_score(score));
    let listed = normalize::citations(normalize::array(&map, "sources"));

    let report = Report {
        score,
        status,
        description: normalize::non_blank(&map, "description")
            .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        issues: objects(&map, "issues").filter_map(issue).collect(),
        verified_facts: objects(&map, "verified_facts")
            .filter_map(verified_fact)
            .collect(),
        sources: dedup_citations(
            completion.citations.iter().cloned().chain(listed),
            REPORT_SOURCE_CAP,
        ),
        claims: objects(&map, "claims").filter_map(claim_verdict).collect(),
        mode: VerificationMode::Aggregate,
    };
    tracing::info!(
        score = report.score,
        status = %report.status,
        issues = report.issues.len(),
        claims = report.claims.len(),
        "single-pass report normalized"
    );
    report
}

fn objects<'a>(map: &'a Object, key: &str) -> impl Iterator<Item = &'a Object> {
    normalize::array(map, key).iter().filter_map(Value::as_object)
}

fn sources(map: &Object, cap: usize) -> Vec<Citation> {
    dedup_citations(normalize::citations(normalize::array(map, "sources")), cap)
}

/// Issue records need claim text; severity is always derived from the kind.
fn issue(map: &Object) -> Option<Issue> {
    let what_article_says = normalize::non_blank(map, "what_article_says");
    let claim = normalize::non_blank(map, "claim").or_else(|| what_article_says.clone())?;
    let kind = normalize::text(map, "type")
        .and_then(|t| IssueKind::parse(&t))
        .unwrap_or(IssueKind::Unverified);

    Some(Issue {
        what_article_says: what_article_says.unwrap_or_else(|| claim.clone()),
        claim,
        kind,
        severity: kind.severity(),
        the_problem: normalize::non_blank(map, "the_problem")
            .unwrap_or_else(|| DEFAULT_PROBLEM.to_string()),
        actual_facts: normalize::non_blank(map, "actual_facts")
            .unwrap_or_else(|| DEFAULT_ACTUAL_FACTS.to_string()),
        why_it_matters: normalize::non_blank(map, "why_it_matters")
            .unwrap_or_else(|| DEFAULT_WHY_IT_MATTERS.to_string()),
        how_to_fix: normalize::non_blank(map, "how_to_fix"),
        sources: sources(map, REPORT_SOURCE_CAP),
    })
}

fn verified_fact(map: &Object) -> Option<VerifiedFact> {
    Some(VerifiedFact {
        claim: normalize::non_blank(map, "claim")?,
        confidence: confidence(map),
        sources: sources(map, REPORT_SOURCE_CAP),
    })
}

/// A `{claim, verdict, confidence, explanation, sources}` entry as a verdict.
/// Unknown verdict labels are read as unverified.
fn claim_verdict(map: &Object) -> Option<Verdict> {
    let claim = normalize::non_blank(map, "claim")?;
    let label = normalize::text(map, "verdict")
        .and_then(|v| VerdictLabel::parse(&v))
        .unwrap_or(VerdictLabel::Unverified);

    Some(Verdict {
        claim,
        is_accurate: label.is_accurate(),
        verdict_label: Some(label),
        confidence: confidence(map),
        issue_type: label.issue_type(),
        explanation: normalize::non_blank(map, "explanation")
            .unwrap_or_else(|| NO_EXPLANATION.to_string()),
        actual_facts: normalize::non_blank(map, "actual_facts"),
        why_it_matters: normalize::non_blank(map, "why_it_matters"),
        sources: sources(map, VERDICT_SOURCE_CAP),
    })
}

fn confidence(map: &Object) -> Confidence {
    normalize::text(map, "confidence")
        .and_then(|c| Confidence::parse(&c))
        .unwrap_or(Confidence::Low)
}
