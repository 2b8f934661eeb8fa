//! Entity structs for the Facty fact-check domain.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation. They are the strict internal model that
//! the response normalizer produces from loosely-shaped service output.

mod citation;
mod claim;
mod issue;
mod job;
mod report;
mod verdict;

pub use citation::Citation;
pub use claim::Claim;
pub use issue::{Issue, VerifiedFact};
pub use job::JobState;
pub use report::Report;
pub use verdict::Verdict;
