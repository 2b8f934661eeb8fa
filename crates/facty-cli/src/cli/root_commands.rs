use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Subcommand, ValueEnum};
use facty_core::enums::{RecencyWindow, VerificationMode};

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fact-check an article file (plain text or HTML)
    Check(CheckArgs),
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Article body to check
    pub file: PathBuf,

    /// Article headline, checked together with the body
    #[arg(long)]
    pub title: Option<String>,

    /// Verification mode (defaults to config)
    #[arg(long)]
    pub mode: Option<ModeArg>,

    /// Maximum number of claims to verify in per-claim mode
    #[arg(long)]
    pub max_claims: Option<usize>,

    /// How far back sources may reach
    #[arg(long)]
    pub recency: Option<RecencyArg>,

    /// Date the article is checked as of, YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ModeArg {
    /// Extract claims and verify each separately
    PerClaim,
    /// One combined research call
    Aggregate,
}

impl From<ModeArg> for VerificationMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::PerClaim => Self::PerClaim,
            ModeArg::Aggregate => Self::Aggregate,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum RecencyArg {
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl From<RecencyArg> for RecencyWindow {
    fn from(window: RecencyArg) -> Self {
        match window {
            RecencyArg::Hour => Self::Hour,
            RecencyArg::Day => Self::Day,
            RecencyArg::Week => Self::Week,
            RecencyArg::Month => Self::Month,
            RecencyArg::Year => Self::Year,
        }
    }
}
