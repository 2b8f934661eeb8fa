//! Citation merging.

use std::collections::HashSet;

use facty_core::Citation;

/// Most sources attached to a single verdict.
pub const VERDICT_SOURCE_CAP: usize = 5;

/// Most sources attached to a report.
pub const REPORT_SOURCE_CAP: usize = 20;

/// Drop repeated citations and keep at most `cap`, preserving first-seen
/// order.
///
/// Two citations are duplicates only when title, url, date and credibility
/// all match. The same URL under a different title is kept twice.
#[must_use]
pub fn dedup_citations<I>(citations: I, cap: usize) -> Vec<Citation>
where
    I: IntoIterator<Item = Citation>,
{
    let mut seen = HashSet::new();
    citations
        .into_iter()
        .filter(|c| seen.insert(c.clone()))
        .take(cap)
        .collect()
}
