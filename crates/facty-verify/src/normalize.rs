//! Defensive parsing of model output.
//!
//! Model content is expected to be a JSON object, possibly wrapped in a
//! Markdown code fence or surrounded by prose. Everything here is total:
//! failures come back as [`NormalizeError`] values for the caller to turn
//! into its own fallback, and field readers return `None` rather than
//! erroring on unexpected shapes.

use facty_client::host_of;
use facty_core::Citation;
use facty_core::enums::Credibility;
use serde_json::{Map, Value};

/// A JSON object as returned by the model.
pub type Object = Map<String, Value>;

/// Why model content could not be read as a JSON object.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    #[error("content is empty")]
    Empty,

    #[error("content is not JSON: {0}")]
    NotJson(String),

    #[error("content is JSON but not an object")]
    NotAnObject,
}

/// Remove a surrounding Markdown code fence (```` ```json ```` or ```` ``` ````).
#[must_use]
pub fn strip_code_fences(raw: &str) -> &str {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix("```") {
        // The "json" info string may or may not be followed by a newline.
        let rest = match rest.get(..4) {
            Some(tag) if tag.eq_ignore_ascii_case("json") => &rest[4..],
            _ => rest,
        };
        text = rest.trim_start();
    }
    if let Some(rest) = text.trim_end().strip_suffix("```") {
        text = rest;
    }
    text.trim()
}

/// Parse model content into a JSON object.
///
/// Tries the fence-stripped content first, then the outermost `{...}` span
/// of the raw content to tolerate leading or trailing prose.
///
/// # Errors
///
/// Returns [`NormalizeError`] when neither attempt yields an object.
pub fn parse_object(raw: &str) -> Result<Object, NormalizeError> {
    let text = strip_code_fences(raw);
    let value = match serde_json::from_str::<Value>(text) {
        Ok(value) => value,
        Err(e) => outermost_braces(raw)
            .and_then(|inner| serde_json::from_str::<Value>(inner).ok())
            .ok_or_else(|| {
                if text.is_empty() {
                    NormalizeError::Empty
                } else {
                    NormalizeError::NotJson(e.to_string())
                }
            })?,
    };

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(NormalizeError::NotAnObject),
    }
}

fn outermost_braces(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}

/// Merge parsed fields over defaults.
///
/// Parsed values win, including present-but-falsy ones such as `""` or
/// `false`. An explicit `null` counts as absent and keeps the default.
#[must_use]
pub fn with_defaults(defaults: Object, parsed: Object) -> Object {
    let mut merged = defaults;
    for (key, value) in parsed {
        if !value.is_null() {
            merged.insert(key, value);
        }
    }
    merged
}

/// A string field, trimmed. Numbers are rendered; other shapes are `None`.
#[must_use]
pub fn text(map: &Object, key: &str) -> Option<String> {
    match map.get(key)? {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// A string field that is present and not blank.
#[must_use]
pub fn non_blank(map: &Object, key: &str) -> Option<String> {
    text(map, key).filter(|s| !s.is_empty())
}

/// A boolean field. Accepts JSON booleans and the strings `"true"`/`"false"`.
#[must_use]
pub fn flag(map: &Object, key: &str) -> Option<bool> {
    match map.get(key)? {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" => Some(true),
            "false" | "no" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// An array field; any other shape yields an empty slice.
#[must_use]
pub fn array<'a>(map: &'a Object, key: &str) -> &'a [Value] {
    map.get(key)
        .and_then(Value::as_array)
        .map_or(&[], Vec::as_slice)
}

/// Read a score from a number or numeric string, rounded and clamped to
/// `0..=100`. Anything else scores 0.
#[must_use]
pub fn clamp_score(value: Option<&Value>) -> u8 {
    let raw = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().trim_end_matches('%').parse::<f64>().ok(),
        _ => None,
    };
    raw.filter(|s| s.is_finite()).map_or(0, to_percent)
}

// In range after the clamp.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_percent(score: f64) -> u8 {
    score.round().clamp(0.0, 100.0) as u8
}

/// Read a model-listed `sources` array into citations.
///
/// Objects need a non-blank `url`; a missing title falls back to the URL
/// host. Bare URL strings are accepted. Credibility defaults to medium.
#[must_use]
pub fn citations(values: &[Value]) -> Vec<Citation> {
    values.iter().filter_map(citation).collect()
}

fn citation(value: &Value) -> Option<Citation> {
    let (url, map) = match value {
        Value::String(url) => (url.trim().to_string(), None),
        Value::Object(map) => (non_blank(map, "url")?, Some(map)),
        _ => return None,
    };
    if url.is_empty() {
        return None;
    }

    let title = map
        .and_then(|m| non_blank(m, "title"))
        .or_else(|| host_of(&url))
        .unwrap_or_else(|| "Source".to_string());
    let credibility = map
        .and_then(|m| non_blank(m, "credibility"))
        .map_or(Credibility::Medium, |c| Credibility::parse(&c));

    let mut citation = Citation::new(title, url, credibility);
    if let Some(date) = map.and_then(|m| non_blank(m, "date")) {
        citation = citation.with_date(date);
    }
    Some(citation)
}
