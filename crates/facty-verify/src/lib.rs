//! # facty-verify
//!
//! The fact-check engine: turns article text into a scored [`Report`].
//!
//! Two modes share the same satire pre-check and response normalizer:
//!
//! - **per-claim** ([`VerificationMode::PerClaim`]): extract up to
//!   `max_claims` claims, verify each with its own search-backed call, then
//!   compile verdicts into a weighted score.
//! - **aggregate** ([`VerificationMode::Aggregate`]): one combined call that
//!   returns a report-shaped payload.
//!
//! Only setup can fail ([`FactCheckError`]). Once a [`FactChecker`] exists,
//! transport errors, error statuses and malformed output all degrade into
//! unverified verdicts or an incomplete report.
//!
//! [`Report`]: facty_core::Report
//! [`VerificationMode::PerClaim`]: facty_core::enums::VerificationMode::PerClaim
//! [`VerificationMode::Aggregate`]: facty_core::enums::VerificationMode::Aggregate

pub mod aggregate;
pub mod article;
pub mod compiler;
mod error;
pub mod extractor;
pub mod normalize;
pub mod pacer;
mod pipeline;
pub mod progress;
pub mod prompts;
pub mod satire;
mod settings;
pub mod sources;
pub mod verifier;

pub use aggregate::AggregateVerifier;
pub use article::prepare_article;
pub use compiler::compile;
pub use error::FactCheckError;
pub use extractor::ClaimExtractor;
pub use pacer::{FixedInterval, Pacer, Unpaced};
pub use pipeline::{FactChecker, NO_CLAIMS_DESCRIPTION, NO_CLAIMS_SCORE};
pub use progress::{JobBoard, JobObserver, NoProgress, ProgressObserver, ProgressUpdate};
pub use satire::is_satire;
pub use settings::CheckSettings;
pub use verifier::ClaimVerifier;

pub use tokio_util::sync::CancellationToken;
