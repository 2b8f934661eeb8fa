//! Serde roundtrip and JsonSchema validation tests for all entity types.

use facty_core::entities::*;
use facty_core::enums::*;
use pretty_assertions::assert_eq;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn reuters() -> Citation {
    Citation::new(
        "Reuters",
        "https://www.reuters.com/world/central-bank-holds-rates",
        Credibility::High,
    )
    .with_date("2026-10-14")
}

fn outdated_verdict() -> Verdict {
    Verdict {
        claim: "The central bank rate is 4.5%.".into(),
        is_accurate: false,
        verdict_label: None,
        confidence: Confidence::High,
        issue_type: IssueType::Outdated,
        explanation: "The rate was cut to 4.25% in September.".into(),
        actual_facts: Some("The policy rate is 4.25% as of October 2026.".into()),
        why_it_matters: Some("Readers may act on a stale figure.".into()),
        sources: vec![reuters()],
    }
}

roundtrip_and_validate!(
    claim_roundtrip,
    Claim,
    Claim::new(
        "Unemployment fell to 3.9% in September.",
        ClaimKind::Statistic,
        Priority::High,
    )
    .unwrap()
);

roundtrip_and_validate!(citation_roundtrip, Citation, reuters());

roundtrip_and_validate!(
    citation_without_date_roundtrip,
    Citation,
    Citation::new("apnews.com", "https://apnews.com/article/x", Credibility::Medium)
);

roundtrip_and_validate!(verdict_roundtrip, Verdict, outdated_verdict());

roundtrip_and_validate!(
    labelled_verdict_roundtrip,
    Verdict,
    Verdict {
        verdict_label: Some(VerdictLabel::PartiallyTrue),
        issue_type: IssueType::Misleading,
        actual_facts: None,
        why_it_matters: None,
        ..outdated_verdict()
    }
);

roundtrip_and_validate!(
    issue_roundtrip,
    Issue,
    Issue {
        claim: "The central bank rate is 4.5%.".into(),
        kind: IssueKind::Outdated,
        severity: IssueKind::Outdated.severity(),
        what_article_says: "The central bank rate is 4.5%.".into(),
        the_problem: "The rate changed last month.".into(),
        actual_facts: "4.25% as of October 2026.".into(),
        why_it_matters: "Readers may act on a stale figure.".into(),
        how_to_fix: Some("Update the figure and cite the September decision.".into()),
        sources: vec![reuters()],
    }
);

roundtrip_and_validate!(
    verified_fact_roundtrip,
    VerifiedFact,
    VerifiedFact {
        claim: "The summit took place in Lisbon.".into(),
        confidence: Confidence::Medium,
        sources: Vec::new(),
    }
);

roundtrip_and_validate!(
    report_roundtrip,
    Report,
    Report {
        score: 53,
        status: ReportStatus::MultipleErrors,
        description: "Multi-step verification analyzed 4 claims: 1 verified accurate, 3 with issues."
            .into(),
        issues: Vec::new(),
        verified_facts: vec![VerifiedFact {
            claim: "The summit took place in Lisbon.".into(),
            confidence: Confidence::High,
            sources: vec![reuters()],
        }],
        sources: vec![reuters()],
        claims: vec![outdated_verdict()],
        mode: VerificationMode::PerClaim,
    }
);

roundtrip_and_validate!(job_state_roundtrip, JobState, JobState::queued());

#[test]
fn issue_type_field_serializes_as_type_label() {
    let issue = Issue {
        claim: "c".into(),
        kind: IssueKind::FactualError,
        severity: Severity::High,
        what_article_says: "c".into(),
        the_problem: "p".into(),
        actual_facts: "a".into(),
        why_it_matters: "w".into(),
        how_to_fix: None,
        sources: Vec::new(),
    };
    let value = serde_json::to_value(&issue).unwrap();
    assert_eq!(value["type"], "Factual Error");
    assert_eq!(value["severity"], "high");
    assert!(value.get("how_to_fix").is_none());
    assert!(value.get("sources").is_none());
}

#[test]
fn report_empty_clamps_score() {
    let report = Report::empty(
        250,
        ReportStatus::Verified,
        "overflow",
        VerificationMode::Aggregate,
    );
    assert_eq!(report.score, 100);
    assert!(report.issues.is_empty());
    assert!(report.claims.is_empty());
}

#[test]
fn unknown_job_state_message() {
    let state = JobState::unknown();
    assert_eq!(state.status, JobStatus::Unknown);
    assert_eq!(state.message, "Job not found");
}
