use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Citation;
use crate::enums::{Confidence, IssueKind, Severity};

/// A claim that failed the accuracy bar, written up for the editor.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Issue {
    pub claim: String,
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub severity: Severity,
    pub what_article_says: String,
    pub the_problem: String,
    pub actual_facts: String,
    pub why_it_matters: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub how_to_fix: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<Citation>,
}

/// A claim that cleared the accuracy bar.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct VerifiedFact {
    pub claim: String,
    pub confidence: Confidence,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<Citation>,
}
