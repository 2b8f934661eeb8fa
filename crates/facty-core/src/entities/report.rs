use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Citation, Issue, Verdict, VerifiedFact};
use crate::enums::{ReportStatus, VerificationMode};

/// Final output of one fact-check run.
///
/// `score` is always within `0..=100`. In per-claim mode `issues` and
/// `verified_facts` partition the verified claims.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Report {
    pub score: u8,
    pub status: ReportStatus,
    pub description: String,
    pub issues: Vec<Issue>,
    pub verified_facts: Vec<VerifiedFact>,
    pub sources: Vec<Citation>,
    /// Claim-level verdicts behind the report, in verification order.
    #[serde(default)]
    pub claims: Vec<Verdict>,
    pub mode: VerificationMode,
}

impl Report {
    /// A report with no claim-level content.
    #[must_use]
    pub fn empty(
        score: u8,
        status: ReportStatus,
        description: impl Into<String>,
        mode: VerificationMode,
    ) -> Self {
        Self {
            score: score.min(100),
            status,
            description: description.into(),
            issues: Vec::new(),
            verified_facts: Vec::new(),
            sources: Vec::new(),
            claims: Vec::new(),
            mode,
        }
    }
}
