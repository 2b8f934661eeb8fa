use std::fmt::Write;

use facty_core::Report;

use crate::cli::OutputFormat;

/// Render a report in the requested format.
pub fn render(report: &Report, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Raw => Ok(serde_json::to_string(report)?),
        OutputFormat::Summary => Ok(summary(report)),
    }
}

/// Print a report to stdout in the requested format.
pub fn print(report: &Report, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(report, format)?;
    println!("{rendered}");
    Ok(())
}

fn summary(report: &Report) -> String {
    let mut out = format!(
        "{} - {}/100\n{}\n",
        report.status.label(),
        report.score,
        report.description
    );

    if !report.issues.is_empty() {
        out.push_str("\nIssues:\n");
        for issue in &report.issues {
            let _ = writeln!(
                out,
                "  [{}] {}: {}",
                issue.severity,
                issue.kind.label(),
                issue.claim
            );
            let _ = writeln!(out, "      {}", issue.the_problem);
            if let Some(fix) = &issue.how_to_fix {
                let _ = writeln!(out, "      fix: {fix}");
            }
        }
    }

    if !report.verified_facts.is_empty() {
        out.push_str("\nVerified:\n");
        for fact in &report.verified_facts {
            let _ = writeln!(out, "  ({}) {}", fact.confidence, fact.claim);
        }
    }

    if !report.sources.is_empty() {
        out.push_str("\nSources:\n");
        for source in &report.sources {
            let _ = writeln!(out, "  {} <{}>", source.title, source.url);
        }
    }

    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use facty_core::enums::{
        Confidence, Credibility, IssueKind, ReportStatus, VerificationMode,
    };
    use facty_core::{Citation, Issue, VerifiedFact};
    use pretty_assertions::assert_eq;

    use super::*;

    fn report() -> Report {
        let mut report = Report::empty(
            64,
            ReportStatus::MultipleErrors,
            "Multi-step verification analyzed 2 claims: 1 verified accurate, 1 with issues.",
            VerificationMode::PerClaim,
        );
        report.issues.push(Issue {
            claim: "Turnout reached 91%.".to_string(),
            kind: IssueKind::FactualError,
            severity: IssueKind::FactualError.severity(),
            what_article_says: "Turnout reached 91%.".to_string(),
            the_problem: "Official turnout was 61%.".to_string(),
            actual_facts: "The election board reported 61%.".to_string(),
            why_it_matters: "Readers are misinformed.".to_string(),
            how_to_fix: Some("Use 61%.".to_string()),
            sources: Vec::new(),
        });
        report.verified_facts.push(VerifiedFact {
            claim: "The vote was held on Sunday.".to_string(),
            confidence: Confidence::High,
            sources: Vec::new(),
        });
        report.sources.push(Citation::new(
            "Election Board",
            "https://elections.example/results",
            Credibility::High,
        ));
        report
    }

    #[test]
    fn summary_lists_every_section() {
        let rendered = render(&report(), OutputFormat::Summary).expect("render");
        assert_eq!(
            rendered,
            "Multiple Errors - 64/100\n\
             Multi-step verification analyzed 2 claims: 1 verified accurate, 1 with issues.\n\
             \n\
             Issues:\n  \
             [high] Factual Error: Turnout reached 91%.\n      \
             Official turnout was 61%.\n      \
             fix: Use 61%.\n\
             \n\
             Verified:\n  \
             (high) The vote was held on Sunday.\n\
             \n\
             Sources:\n  \
             Election Board <https://elections.example/results>"
        );
    }

    #[test]
    fn summary_of_empty_report_is_the_header() {
        let report = Report::empty(
            75,
            ReportStatus::NeedsReview,
            "No specific factual claims found to verify in this article.",
            VerificationMode::PerClaim,
        );
        let rendered = render(&report, OutputFormat::Summary).expect("render");
        assert_eq!(
            rendered,
            "Needs Review - 75/100\nNo specific factual claims found to verify in this article."
        );
    }

    #[test]
    fn json_formats_round_trip() {
        let report = report();
        for format in [OutputFormat::Json, OutputFormat::Raw] {
            let rendered = render(&report, format).expect("render");
            let parsed: Report = serde_json::from_str(&rendered).expect("parse");
            assert_eq!(parsed, report);
        }
        let raw = render(&report, OutputFormat::Raw).expect("render");
        assert!(!raw.contains('\n'));
    }
}
