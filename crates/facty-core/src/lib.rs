//! # facty-core
//!
//! Core types and error types for Facty.
//!
//! This crate provides the foundational types shared across all Facty crates:
//! - Entity structs for the fact-check domain (claims, verdicts, citations,
//!   issues, reports)
//! - Classification enums with their fixed lookup tables (issue severity,
//!   status ladder)
//! - The job/progress state record written by the progress reporter
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;

pub use entities::{Citation, Claim, Issue, JobState, Report, Verdict, VerifiedFact};
pub use errors::CoreError;
