use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ClaimKind, Priority};
use crate::errors::CoreError;

/// An atomic, independently verifiable assertion taken from an article.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Claim {
    pub text: String,
    pub kind: ClaimKind,
    pub priority: Priority,
}

impl Claim {
    /// Build a claim, rejecting blank text.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if `text` is empty or whitespace.
    pub fn new(
        text: impl Into<String>,
        kind: ClaimKind,
        priority: Priority,
    ) -> Result<Self, CoreError> {
        let text = text.into();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(CoreError::Validation("claim text is empty".to_string()));
        }
        Ok(Self {
            text: trimmed.to_string(),
            kind,
            priority,
        })
    }
}
