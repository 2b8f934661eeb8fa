//! Single-pass mode through the pipeline.

mod support;

use facty_client::{ChatCompletion, ClientError};
use facty_core::Citation;
use facty_core::enums::{
    Credibility, IssueKind, RecencyWindow, ReportStatus, Severity, VerdictLabel,
    VerificationMode,
};
use facty_verify::NoProgress;
use facty_verify::aggregate::{INCOMPLETE_DESCRIPTION, INCOMPLETE_SCORE};
use pretty_assertions::assert_eq;
use serde_json::json;
use support::{Recorder, ScriptedTransport, checker, today};

const ARTICLE: &str = "The mayor announced on Friday that the new bridge will open in May.";

fn payload() -> String {
    let body = json!({
        "is_satire": false,
        "score": 72.6,
        "status": "Needs Review",
        "description": "One claim could not be confirmed.",
        "issues": [
            {
                "claim": "The bridge will open in May.",
                "type": "outdated",
                "severity": "critical",
                "what_article_says": "The bridge will open in May.",
                "the_problem": "The opening moved to June.",
                "actual_facts": "City hall announced a June opening last week.",
                "why_it_matters": "Commuters plan around the date.",
                "how_to_fix": "Say the bridge opens in June.",
                "sources": [{"title": "City Hall", "url": "https://city.example/bridge"}]
            },
            {"type": "factual_error", "the_problem": "no claim text"}
        ],
        "verified_facts": [
            {"claim": "The mayor spoke on Friday.", "confidence": "high", "sources": []},
            {"confidence": "high"}
        ],
        "claims": [
            {"claim": "The mayor spoke on Friday.", "verdict": "accurate", "confidence": "high"},
            {"claim": "The bridge will open in May.", "verdict": "Partially True", "confidence": "medium"},
            {"claim": "Turnout was record high.", "verdict": "somewhat true"}
        ],
        "sources": [
            {"title": "City Hall", "url": "https://city.example/bridge", "credibility": "high"},
            {"title": "Local Paper", "url": "https://paper.example/mayor", "credibility": "medium"}
        ]
    });
    format!("Here is the report:\n```json\n{body:#}\n```")
}

#[tokio::test]
async fn payload_is_normalized_into_a_report() {
    let native = Citation::new("Wire", "https://wire.example/story", Credibility::High);
    let transport = ScriptedTransport::new().reply_with(ChatCompletion {
        content: payload(),
        citations: vec![native.clone()],
    });

    let report = checker(&transport, VerificationMode::Aggregate)
        .check(ARTICLE, today(), &NoProgress)
        .await;

    assert_eq!(report.score, 73);
    assert_eq!(report.status, ReportStatus::NeedsReview);
    assert_eq!(report.mode, VerificationMode::Aggregate);

    assert_eq!(report.issues.len(), 1);
    let issue = &report.issues[0];
    assert_eq!(issue.kind, IssueKind::Outdated);
    assert_eq!(issue.severity, Severity::Medium);
    assert_eq!(issue.how_to_fix.as_deref(), Some("Say the bridge opens in June."));

    assert_eq!(report.verified_facts.len(), 1);

    let labels: Vec<_> = report.claims.iter().map(|c| c.verdict_label).collect();
    assert_eq!(
        labels,
        vec![
            Some(VerdictLabel::Accurate),
            Some(VerdictLabel::PartiallyTrue),
            Some(VerdictLabel::Unverified),
        ]
    );

    let urls: Vec<_> = report.sources.iter().map(|s| s.url.as_str()).collect();
    assert_eq!(
        urls,
        vec![
            "https://wire.example/story",
            "https://city.example/bridge",
            "https://paper.example/mayor",
        ]
    );
}

#[tokio::test]
async fn one_search_backed_call_is_made() {
    let transport = ScriptedTransport::new().reply(&payload());
    let recorder = Recorder::default();

    let _ = checker(&transport, VerificationMode::Aggregate)
        .check(ARTICLE, today(), &recorder)
        .await;

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].max_tokens, 6000);
    assert_eq!(requests[0].return_citations, Some(true));
    assert_eq!(requests[0].search_recency_filter, Some(RecencyWindow::Week));
    assert!(requests[0].user_prompt().contains(ARTICLE));
    assert_eq!(recorder.percents(), vec![15, 30, 95, 100]);
}

#[tokio::test]
async fn unreadable_payload_keeps_native_citations() {
    let native = Citation::new("Wire", "https://wire.example/story", Credibility::High);
    let transport = ScriptedTransport::new().reply_with(ChatCompletion {
        content: "I could not complete the analysis.".to_string(),
        citations: vec![native.clone()],
    });

    let report = checker(&transport, VerificationMode::Aggregate)
        .check(ARTICLE, today(), &NoProgress)
        .await;

    assert_eq!(report.score, INCOMPLETE_SCORE);
    assert_eq!(report.status, ReportStatus::AnalysisIncomplete);
    assert_eq!(report.description, INCOMPLETE_DESCRIPTION);
    assert_eq!(report.sources, vec![native]);
}

#[tokio::test]
async fn service_failure_degrades_to_incomplete() {
    let transport = ScriptedTransport::new().fail(ClientError::Api {
        status: 500,
        message: "internal error".into(),
    });

    let report = checker(&transport, VerificationMode::Aggregate)
        .check(ARTICLE, today(), &NoProgress)
        .await;

    assert_eq!(report.status, ReportStatus::AnalysisIncomplete);
    assert_eq!(report.score, 50);
    assert!(report.sources.is_empty());
}
