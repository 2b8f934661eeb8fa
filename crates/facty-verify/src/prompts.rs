//! Prompt text for the three kinds of service call.
//!
//! Each builder returns `(system, user)`. All prompts ground the model in the
//! run's date and ask for bare JSON; the verification prompts repeat the rule
//! that missing evidence means `unverified`, never `factual_error`.

use chrono::NaiveDate;
use facty_core::enums::{ClaimKind, RecencyWindow};

/// `October 18, 2026`.
#[must_use]
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

pub const EXTRACTION_SYSTEM: &str =
    "You are a claim extraction specialist. Return only valid JSON.";

#[must_use]
pub fn extraction(article: &str, today: NaiveDate, max_claims: usize) -> (String, String) {
    let date = long_date(today);
    let user = format!(
        r#"Extract the factual claims in the article below that can be checked against sources. Today is {date}.

Extract at most {max_claims} claims.

EXTRACT:
- specific facts, statistics, numbers and dates
- claims about events, people, places and policies
- statements that can be true or false
- who currently holds an office, appointment or position

SKIP:
- opinions, predictions and speculation
- questions and hypotheticals
- general observations
- obvious common knowledge

ARTICLE:
{article}

Respond with this JSON and nothing else:
{{
  "claims": [
    {{
      "claim": "exact wording from the article",
      "type": "statistic" | "event" | "appointment" | "policy" | "general_fact",
      "priority": "high" | "medium" | "low"
    }}
  ]
}}

List the {max_claims} most important claims first."#
    );
    (EXTRACTION_SYSTEM.to_string(), user)
}

#[must_use]
pub fn claim_verification(
    claim: &str,
    kind: ClaimKind,
    today: NaiveDate,
    window: RecencyWindow,
) -> (String, String) {
    let date = long_date(today);
    let system = format!(
        "You are a precise fact-checker with access to sources from the past {window}. \
         Prefer the most recent sources when checking current information. \
         Never mark a claim as factual_error without strong contradicting evidence; \
         if you cannot find sources, mark it as unverified. Return only valid JSON."
    );
    let user = format!(
        r#"Fact-check this single claim. Today is {date}.

Sources are limited to the past {window}. Prefer the newest ones for current events and use older ones only for background.

CLAIM:
"{claim}"

CLAIM TYPE: {kind}

STEPS:
1. Search the web, newest sources first.
2. For officials and office holders, confirm who holds the position as of {date}.
3. Cross-reference at least two reliable sources.
4. Decide whether the claim is accurate, outdated, misleading or false.

RULES:
- Use "factual_error" only with strong, recent, credible evidence that contradicts the claim.
- No sources found means "unverified", not "factual_error".
- Check that dates and timelines are consistent with {date}.
- Look for updates or corrections to the claim.
- Say when a claim needs more context.
- An event from the last hour or two may not be indexed yet; "unverified" with that explanation is acceptable.
- Between "unverified" and "factual_error", choose "unverified".

Respond with this JSON and nothing else:
{{
  "claim": "the claim being verified",
  "is_accurate": true | false,
  "confidence": "high" | "medium" | "low",
  "issue_type": "none" | "factual_error" | "outdated" | "misleading" | "unverified" | "missing_context",
  "explanation": "short explanation with the facts as of {date}",
  "actual_facts": "what is true as of {date}, if the claim is inaccurate",
  "why_it_matters": "why this matters to readers, if the claim is inaccurate",
  "sources": [
    {{"title": "source title", "url": "https://...", "date": "publication date", "credibility": "high" | "medium"}}
  ]
}}"#
    );
    (system, user)
}

pub const AGGREGATE_SYSTEM: &str = "You are a precise fact-checker for editors. Return only valid JSON. \
     Prefer the most recent sources. Never mark a claim as false without strong contradicting \
     evidence; if uncertain, mark it as unverified.";

#[must_use]
pub fn aggregate(article: &str, today: NaiveDate, window: RecencyWindow) -> (String, String) {
    let date = long_date(today);
    let user = format!(
        r#"You are fact-checking an article for its editors before publication. Today is {date}.

Produce a detailed report the editors can act on.

ARTICLE:
{article}

1. SATIRE: if the piece is clearly satirical (absurd scenarios, obvious jokes), return only:
{{"score": 100, "status": "Satire", "description": "This is satirical content.", "claims": [], "issues": [], "verified_facts": [], "sources": []}}

2. Otherwise identify 5 to 15 key factual claims (skip opinions and predictions) and verify each one with live web search.

3. VERIFICATION RULES:
- Use only sources from the past {window}, newest first for current events.
- Confirm office holders and current events as of {date}.
- Cross-reference several credible sources before calling anything false.
- Use "Factual Error" only with strong contradicting evidence.
- No sources found means "Unverified", not "Factual Error". Unverified is not false.

4. SCORING (use the full 0-100 range):
- 95-100: accurate, well sourced, current
- 85-94: accurate with minor issues or some unverified claims
- 70-84: mostly accurate, some problems
- 50-69: mixed accuracy, significant concerns
- 30-49: mostly inaccurate or outdated
- 0-29: false or highly misleading
Unverified claims should not drag the score down much; a solid article with a few unverified claims can still score 80-90.

5. Respond with this JSON and nothing else:
{{
  "score": <integer 0-100>,
  "status": "Verified" | "Mostly Accurate" | "Needs Review" | "Multiple Errors" | "False" | "Satire",
  "description": "one sentence for editors on overall accuracy",
  "claims": [
    {{
      "claim": "quote or close paraphrase",
      "verdict": "Accurate" | "Partially True" | "False" | "Unverified",
      "confidence": "high" | "medium" | "low",
      "explanation": "explanation for editors",
      "sources": [{{"title": "source", "url": "https://...", "date": "YYYY-MM-DD", "credibility": "high" | "medium"}}]
    }}
  ],
  "issues": [
    {{
      "claim": "quote from the article",
      "type": "Factual Error" | "Outdated" | "Misleading" | "Unverified" | "Missing Context",
      "severity": "high" | "medium" | "low",
      "what_article_says": "the problematic statement",
      "the_problem": "why it is wrong, misleading or unverified",
      "actual_facts": "what is actually true, with sources",
      "how_to_fix": "a specific fix for the editor",
      "sources": [{{"title": "source", "url": "https://...", "date": "YYYY-MM-DD"}}]
    }}
  ],
  "verified_facts": [
    {{"claim": "accurate claim", "confidence": "high" | "medium", "sources": [{{"title": "source", "url": "https://..."}}]}}
  ],
  "sources": [
    {{"title": "source", "url": "https://...", "credibility": "high" | "medium", "date": "YYYY-MM-DD"}}
  ]
}}

ISSUE TYPES:
- "Factual Error": multiple recent, credible sources contradict the claim
- "Unverified": no sources found (lack of evidence is not falsity)
- "Outdated": was true but is no longer accurate as of {date}
- "Misleading": technically true but missing critical context
- "Missing Context": needs additional information

Cite sources for every claim and issue, suggest where editors might verify unverified claims, and prefer sources dated closest to {date}."#
    );
    (AGGREGATE_SYSTEM.to_string(), user)
}
