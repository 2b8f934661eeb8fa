//! Report compilation for per-claim mode.
//!
//! Verdicts are partitioned into verified facts and issues, then scored with
//! a weighted average that treats uncertainty more gently than falsehood:
//!
//! ```text
//! accurate                                  100
//! unverified                                 80
//! failing with no issue type                  0
//! outdated / misleading / missing context    50
//! factual error                               0   and −5 flat per occurrence
//! ```

use facty_core::enums::{IssueKind, IssueType, ReportStatus, VerificationMode};
use facty_core::{Issue, Report, Verdict, VerifiedFact};

use crate::sources::{REPORT_SOURCE_CAP, dedup_citations};

const ACCURATE_POINTS: usize = 100;
const UNVERIFIED_POINTS: usize = 80;
const MISLEADING_POINTS: usize = 50;
const FACTUAL_ERROR_PENALTY: usize = 5;

pub(crate) const DEFAULT_PROBLEM: &str = "Could not verify this claim";
pub(crate) const DEFAULT_ACTUAL_FACTS: &str = "See explanation";
pub(crate) const DEFAULT_WHY_IT_MATTERS: &str = "Accuracy is important for reader trust";

/// Counts behind the weighted score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Tally {
    accurate: usize,
    unverified: usize,
    misleading: usize,
    factual_errors: usize,
}

impl Tally {
    /// An issue that names no issue type earns no points.
    fn record(&mut self, issue_type: IssueType) {
        match issue_type {
            IssueType::FactualError => self.factual_errors += 1,
            IssueType::Outdated | IssueType::Misleading | IssueType::MissingContext => {
                self.misleading += 1;
            }
            IssueType::Unverified => self.unverified += 1,
            IssueType::None => {}
        }
    }

    /// Weighted average over `total_claims`, rounded half up, less the flat
    /// factual-error penalty, clamped to `0..=100`. No claims scores 0.
    fn score(&self, total_claims: usize) -> u8 {
        if total_claims == 0 {
            return 0;
        }
        let points = self.accurate * ACCURATE_POINTS
            + self.unverified * UNVERIFIED_POINTS
            + self.misleading * MISLEADING_POINTS;
        let average = (2 * points + total_claims) / (2 * total_claims);
        let penalized = average.saturating_sub(self.factual_errors * FACTUAL_ERROR_PENALTY);
        u8::try_from(penalized.min(100)).unwrap_or(100)
    }
}

/// Reduce per-claim verdicts to one report.
///
/// A verdict is accurate when flagged accurate with better than low
/// confidence; every other verdict becomes exactly one issue. Sources from
/// all verdicts are merged, deduplicated and capped. The verdicts themselves
/// are kept on the report.
#[must_use]
pub fn compile(verdicts: Vec<Verdict>, total_claims: usize) -> Report {
    let mut tally = Tally::default();
    let mut issues = Vec::new();
    let mut verified_facts = Vec::new();

    for verdict in &verdicts {
        if verdict.counts_as_accurate() {
            tally.accurate += 1;
            verified_facts.push(VerifiedFact {
                claim: verdict.claim.clone(),
                confidence: verdict.confidence,
                sources: verdict.sources.clone(),
            });
        } else {
            tally.record(verdict.issue_type);
            issues.push(issue_from(verdict, verdict.issue_type.issue_kind()));
        }
    }

    let score = tally.score(total_claims);
    let status = ReportStatus::from_score(score);
    let sources = dedup_citations(
        verdicts.iter().flat_map(|v| v.sources.iter().cloned()),
        REPORT_SOURCE_CAP,
    );
    let description = format!(
        "Multi-step verification analyzed {total_claims} claims: {} verified accurate, {} with issues.",
        verified_facts.len(),
        issues.len()
    );

    tracing::info!(
        score,
        status = %status,
        issues = issues.len(),
        verified = verified_facts.len(),
        "report compiled"
    );

    Report {
        score,
        status,
        description,
        issues,
        verified_facts,
        sources,
        claims: verdicts,
        mode: VerificationMode::PerClaim,
    }
}

fn issue_from(verdict: &Verdict, kind: IssueKind) -> Issue {
    let the_problem = if verdict.explanation.trim().is_empty() {
        DEFAULT_PROBLEM.to_string()
    } else {
        verdict.explanation.clone()
    };
    Issue {
        claim: verdict.claim.clone(),
        kind,
        severity: kind.severity(),
        what_article_says: verdict.claim.clone(),
        the_problem,
        actual_facts: verdict
            .actual_facts
            .clone()
            .unwrap_or_else(|| DEFAULT_ACTUAL_FACTS.to_string()),
        why_it_matters: verdict
            .why_it_matters
            .clone()
            .unwrap_or_else(|| DEFAULT_WHY_IT_MATTERS.to_string()),
        how_to_fix: None,
        sources: verdict.sources.clone(),
    }
}
