//! Chat-completion response mapping.
//!
//! The service answers with the model's text in `choices[0].message.content`
//! and, for search-backed calls, the sources it consulted. Those arrive either
//! as `citations` (bare URLs or `{title, url}` objects) or as
//! `search_results` (`{title, url, date}`); both are folded into
//! high-credibility [`Citation`]s.

use std::collections::HashSet;

use facty_core::Citation;
use facty_core::enums::Credibility;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ClientError;

/// Text content plus the sources the search layer surfaced natively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatCompletion {
    pub content: String,
    pub citations: Vec<Citation>,
}

impl ChatCompletion {
    /// A completion with content only, no native citations.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            citations: Vec::new(),
        }
    }
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    citations: Option<Value>,
    search_results: Option<Value>,
}

/// Entries of an optional list field; `null` or a non-array reads as empty.
fn entries(field: Option<&Value>) -> &[Value] {
    field.and_then(Value::as_array).map_or(&[][..], Vec::as_slice)
}

#[derive(Deserialize)]
struct Choice {
    message: Option<Message>,
}

#[derive(Deserialize)]
struct Message {
    content: Option<String>,
}

/// Host part of a URL, used as a title for untitled sources.
#[must_use]
pub fn host_of(url: &str) -> Option<String> {
    reqwest::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
}

/// Map a raw response body to a [`ChatCompletion`].
///
/// # Errors
///
/// Returns [`ClientError::InvalidResponse`] if the body is not JSON or has no
/// `choices[0].message.content`.
pub fn parse_completion(body: &str) -> Result<ChatCompletion, ClientError> {
    let data: CompletionResponse = serde_json::from_str(body)
        .map_err(|e| ClientError::InvalidResponse(format!("body is not a completion: {e}")))?;

    let content = data
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message)
        .and_then(|m| m.content)
        .ok_or_else(|| {
            ClientError::InvalidResponse("missing choices[0].message.content".to_string())
        })?;

    Ok(ChatCompletion {
        content,
        citations: native_citations(
            entries(data.search_results.as_ref()),
            entries(data.citations.as_ref()),
        ),
    })
}

/// Fold `search_results` and `citations` into one list, search results first.
///
/// A bare citation URL already covered by a search result is skipped; entries
/// without a URL are dropped.
fn native_citations(search_results: &[Value], citations: &[Value]) -> Vec<Citation> {
    let mut out = Vec::new();
    let mut seen = HashSet::new();

    for entry in search_results.iter().chain(citations) {
        let (url, title, date) = match entry {
            Value::String(url) => (url.as_str(), None, None),
            Value::Object(map) => {
                let Some(url) = map.get("url").and_then(Value::as_str) else {
                    continue;
                };
                (
                    url,
                    map.get("title").and_then(Value::as_str),
                    map.get("date").and_then(Value::as_str),
                )
            }
            _ => continue,
        };
        let url = url.trim();
        if url.is_empty() || !seen.insert(url.to_string()) {
            continue;
        }

        let title = title
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .or_else(|| host_of(url))
            .unwrap_or_else(|| "Source".to_string());
        let mut citation = Citation::new(title, url, Credibility::High);
        if let Some(date) = date.filter(|d| !d.trim().is_empty()) {
            citation = citation.with_date(date);
        }
        out.push(citation);
    }
    out
}
