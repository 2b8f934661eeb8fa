//! Classification enums for the Facty fact-check domain.
//!
//! Machine-facing enums use `snake_case` serialization via
//! `#[serde(rename_all = "snake_case")]`. Editor-facing enums (issue labels,
//! report status, verdict labels) serialize as their human labels.
//!
//! Every enum offers a lenient `parse` used by the response normalizer:
//! it accepts any casing and treats spaces, hyphens and underscores alike,
//! returning `None` for values outside the enumeration.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fold a raw model-supplied token to `lower_snake_case`.
fn token(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Confidence
// ---------------------------------------------------------------------------

/// Confidence level attached to a verdict or verified fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match token(raw).as_str() {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// How important a claim is to verify, as judged at extraction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match token(raw).as_str() {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ClaimKind
// ---------------------------------------------------------------------------

/// What sort of assertion a claim makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ClaimKind {
    Statistic,
    Event,
    Appointment,
    Policy,
    #[default]
    GeneralFact,
}

impl ClaimKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Statistic => "statistic",
            Self::Event => "event",
            Self::Appointment => "appointment",
            Self::Policy => "policy",
            Self::GeneralFact => "general_fact",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match token(raw).as_str() {
            "statistic" => Some(Self::Statistic),
            "event" => Some(Self::Event),
            "appointment" => Some(Self::Appointment),
            "policy" => Some(Self::Policy),
            "general_fact" | "fact" => Some(Self::GeneralFact),
            _ => None,
        }
    }
}

impl fmt::Display for ClaimKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// IssueType
// ---------------------------------------------------------------------------

/// Machine classification of what is wrong with a claim.
///
/// Values outside this set are normalized to [`IssueType::Unverified`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    None,
    FactualError,
    Outdated,
    Misleading,
    #[default]
    Unverified,
    MissingContext,
}

impl IssueType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::FactualError => "factual_error",
            Self::Outdated => "outdated",
            Self::Misleading => "misleading",
            Self::Unverified => "unverified",
            Self::MissingContext => "missing_context",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match token(raw).as_str() {
            "none" => Some(Self::None),
            "factual_error" => Some(Self::FactualError),
            "outdated" => Some(Self::Outdated),
            "misleading" => Some(Self::Misleading),
            "unverified" => Some(Self::Unverified),
            "missing_context" => Some(Self::MissingContext),
            _ => None,
        }
    }

    /// The editor-facing issue kind for a verdict that failed the accuracy bar.
    ///
    /// A failing verdict that names no issue is reported as unverified.
    #[must_use]
    pub const fn issue_kind(self) -> IssueKind {
        match self {
            Self::FactualError => IssueKind::FactualError,
            Self::Outdated => IssueKind::Outdated,
            Self::Misleading => IssueKind::Misleading,
            Self::MissingContext => IssueKind::MissingContext,
            Self::None | Self::Unverified => IssueKind::Unverified,
        }
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// IssueKind
// ---------------------------------------------------------------------------

/// Editor-facing issue label, serialized as its human label.
///
/// Severity is a pure function of the kind:
///
/// ```text
/// Factual Error   → high
/// Outdated        → medium
/// Misleading      → medium
/// Missing Context → low
/// Unverified      → low
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum IssueKind {
    #[serde(rename = "Factual Error")]
    FactualError,
    #[serde(rename = "Outdated")]
    Outdated,
    #[serde(rename = "Misleading")]
    Misleading,
    #[serde(rename = "Missing Context")]
    MissingContext,
    #[serde(rename = "Unverified")]
    Unverified,
}

impl IssueKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FactualError => "Factual Error",
            Self::Outdated => "Outdated",
            Self::Misleading => "Misleading",
            Self::MissingContext => "Missing Context",
            Self::Unverified => "Unverified",
        }
    }

    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::FactualError => Severity::High,
            Self::Outdated | Self::Misleading => Severity::Medium,
            Self::MissingContext | Self::Unverified => Severity::Low,
        }
    }

    /// Parse either the human label (`"Factual Error"`) or the machine
    /// token (`"factual_error"`).
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match token(raw).as_str() {
            "factual_error" => Some(Self::FactualError),
            "outdated" => Some(Self::Outdated),
            "misleading" => Some(Self::Misleading),
            "missing_context" => Some(Self::MissingContext),
            "unverified" => Some(Self::Unverified),
            _ => None,
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Credibility
// ---------------------------------------------------------------------------

/// Credibility of an evidence source. Anything not `high` is `medium`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Credibility {
    High,
    #[default]
    Medium,
}

impl Credibility {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if token(raw) == "high" {
            Self::High
        } else {
            Self::Medium
        }
    }
}

impl fmt::Display for Credibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// VerdictLabel
// ---------------------------------------------------------------------------

/// Claim verdict as reported by the single-pass verifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum VerdictLabel {
    Accurate,
    #[serde(rename = "Partially True")]
    PartiallyTrue,
    False,
    Unverified,
}

impl VerdictLabel {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Accurate => "Accurate",
            Self::PartiallyTrue => "Partially True",
            Self::False => "False",
            Self::Unverified => "Unverified",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match token(raw).as_str() {
            "accurate" | "true" => Some(Self::Accurate),
            "partially_true" | "partially_accurate" => Some(Self::PartiallyTrue),
            "false" | "inaccurate" => Some(Self::False),
            "unverified" => Some(Self::Unverified),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_accurate(self) -> bool {
        matches!(self, Self::Accurate)
    }

    /// Issue classification implied by the label.
    #[must_use]
    pub const fn issue_type(self) -> IssueType {
        match self {
            Self::Accurate => IssueType::None,
            Self::PartiallyTrue => IssueType::Misleading,
            Self::False => IssueType::FactualError,
            Self::Unverified => IssueType::Unverified,
        }
    }
}

impl fmt::Display for VerdictLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// ReportStatus
// ---------------------------------------------------------------------------

/// Overall report status, serialized as its human label.
///
/// Derived from the score by a fixed ladder:
///
/// ```text
/// ≥95 Verified
/// ≥85 Mostly Accurate
/// ≥70 Needs Review
/// ≥50 Multiple Errors
///  <50 False
/// ```
///
/// `Satire` and `Analysis Incomplete` are assigned directly, never derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ReportStatus {
    Verified,
    #[serde(rename = "Mostly Accurate")]
    MostlyAccurate,
    #[serde(rename = "Needs Review")]
    NeedsReview,
    #[serde(rename = "Multiple Errors")]
    MultipleErrors,
    False,
    Satire,
    #[serde(rename = "Analysis Incomplete")]
    AnalysisIncomplete,
}

impl ReportStatus {
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            95.. => Self::Verified,
            85..=94 => Self::MostlyAccurate,
            70..=84 => Self::NeedsReview,
            50..=69 => Self::MultipleErrors,
            _ => Self::False,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Verified => "Verified",
            Self::MostlyAccurate => "Mostly Accurate",
            Self::NeedsReview => "Needs Review",
            Self::MultipleErrors => "Multiple Errors",
            Self::False => "False",
            Self::Satire => "Satire",
            Self::AnalysisIncomplete => "Analysis Incomplete",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match token(raw).as_str() {
            "verified" => Some(Self::Verified),
            "mostly_accurate" => Some(Self::MostlyAccurate),
            "needs_review" => Some(Self::NeedsReview),
            "multiple_errors" => Some(Self::MultipleErrors),
            "false" => Some(Self::False),
            "satire" => Some(Self::Satire),
            "analysis_incomplete" => Some(Self::AnalysisIncomplete),
            _ => None,
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// VerificationMode
// ---------------------------------------------------------------------------

/// Which verification path produced a report.
///
/// ```text
/// per_claim  extract → verify each claim → compile   (N+1 calls)
/// aggregate  one combined identify-and-verify call   (1 call)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum VerificationMode {
    #[default]
    PerClaim,
    Aggregate,
}

impl VerificationMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PerClaim => "per_claim",
            Self::Aggregate => "aggregate",
        }
    }
}

impl fmt::Display for VerificationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RecencyWindow
// ---------------------------------------------------------------------------

/// How far back retrieval may draw sources from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RecencyWindow {
    Hour,
    Day,
    #[default]
    Week,
    Month,
    Year,
}

impl RecencyWindow {
    /// Value sent as the service's `search_recency_filter`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match token(raw).as_str() {
            "hour" => Some(Self::Hour),
            "day" => Some(Self::Day),
            "week" => Some(Self::Week),
            "month" => Some(Self::Month),
            "year" => Some(Self::Year),
            _ => None,
        }
    }
}

impl fmt::Display for RecencyWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// JobStatus
// ---------------------------------------------------------------------------

/// Lifecycle of a background fact-check job.
///
/// ```text
/// queued → processing → completed
///                     → failed
/// ```
///
/// `Unknown` is only returned for lookups of ids the store has never seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Queued,
    Processing,
    Completed,
    Failed,
    Unknown,
}

impl JobStatus {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Queued => &[Self::Processing, Self::Failed],
            Self::Processing => &[Self::Processing, Self::Completed, Self::Failed],
            Self::Completed | Self::Failed | Self::Unknown => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Queued => "queued",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Stage
// ---------------------------------------------------------------------------

/// Coarse pipeline stage reported alongside a progress percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Initializing,
    Analyzing,
    Extracting,
    Verifying,
    Researching,
    Generating,
    Complete,
    Error,
}

impl Stage {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Initializing => "initializing",
            Self::Analyzing => "analyzing",
            Self::Extracting => "extracting",
            Self::Verifying => "verifying",
            Self::Researching => "researching",
            Self::Generating => "generating",
            Self::Complete => "complete",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
