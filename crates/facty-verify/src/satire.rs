//! Satire pre-check.
//!
//! Runs before any service call. A match short-circuits the pipeline to a
//! fixed report so satirical pieces are never fact-checked as news.

use std::sync::LazyLock;

use facty_core::Report;
use facty_core::enums::{ReportStatus, VerificationMode};
use regex::Regex;

pub const SATIRE_DESCRIPTION: &str = "This is satirical content meant for entertainment.";

// "parody" is matched anywhere so "parodying" and "self-parody" also trip it.
static INDICATORS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)parody|\b(?:satire|satirical|joke|humor|humorous|comedy|comedic|onion|babylonbee|not to be taken seriously|for entertainment purposes|fictional account)\b",
    )
    .unwrap_or_else(|_| unreachable!("static pattern"))
});

/// True when the article text carries a satire indicator.
#[must_use]
pub fn is_satire(article: &str) -> bool {
    INDICATORS.is_match(article)
}

/// The fixed report returned for satirical content.
#[must_use]
pub fn satire_report(mode: VerificationMode) -> Report {
    Report::empty(100, ReportStatus::Satire, SATIRE_DESCRIPTION, mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("A PARODY of the evening news")]
    #[case("The senator's speech read like self-parody.")]
    #[case("This piece is satire.")]
    #[case("Reprinted from The Onion.")]
    #[case("Published for entertainment purposes only.")]
    #[case("What follows is a Fictional Account of the summit.")]
    fn detects_indicators(#[case] text: &str) {
        assert!(is_satire(text), "{text}");
    }

    #[rstest]
    #[case("The central bank held rates at 4.25% on Tuesday.")]
    #[case("Onions prices rose 12% this quarter.")]
    #[case("Officials said the joker card was removed from the deck.")]
    fn ignores_plain_news(#[case] text: &str) {
        assert!(!is_satire(text), "{text}");
    }

    #[test]
    fn satire_report_is_fixed() {
        let report = satire_report(VerificationMode::Aggregate);
        assert_eq!(report.score, 100);
        assert_eq!(report.status, ReportStatus::Satire);
        assert_eq!(report.description, SATIRE_DESCRIPTION);
        assert!(report.issues.is_empty());
        assert!(report.verified_facts.is_empty());
        assert_eq!(report.mode, VerificationMode::Aggregate);
    }
}
