use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Credibility;

/// An evidence source backing or contradicting a claim.
///
/// Equality and hashing cover the whole tuple (title, url, date,
/// credibility), so two entries for the same URL with different titles are
/// distinct values.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
pub struct Citation {
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default)]
    pub credibility: Credibility,
}

impl Citation {
    #[must_use]
    pub fn new(title: impl Into<String>, url: impl Into<String>, credibility: Credibility) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            date: None,
            credibility,
        }
    }

    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}
