use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Citation;
use crate::enums::{Confidence, IssueType, VerdictLabel};

/// The outcome of verifying one claim.
///
/// Per-claim verification fills `is_accurate`; single-pass verification also
/// carries the service's `verdict_label`, from which `is_accurate` is derived.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Verdict {
    pub claim: String,
    pub is_accurate: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verdict_label: Option<VerdictLabel>,
    pub confidence: Confidence,
    pub issue_type: IssueType,
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_facts: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub why_it_matters: Option<String>,
    #[serde(default)]
    pub sources: Vec<Citation>,
}

impl Verdict {
    /// A low-confidence `unverified` verdict carrying only an explanation.
    ///
    /// Used for every degraded verification path; failures never surface as
    /// `factual_error`.
    #[must_use]
    pub fn unverified(claim: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self {
            claim: claim.into(),
            is_accurate: false,
            verdict_label: None,
            confidence: Confidence::Low,
            issue_type: IssueType::Unverified,
            explanation: explanation.into(),
            actual_facts: None,
            why_it_matters: None,
            sources: Vec::new(),
        }
    }

    /// Whether the verdict clears the accuracy bar: marked accurate and held
    /// with better than low confidence.
    #[must_use]
    pub fn counts_as_accurate(&self) -> bool {
        self.is_accurate && self.confidence != Confidence::Low
    }
}
