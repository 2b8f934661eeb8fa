//! # facty-client
//!
//! Retrieval-augmented chat-completion client for Facty.
//!
//! Every model call in the fact-check pipeline goes through the
//! [`ChatTransport`] trait: claim extraction, per-claim verification and the
//! single-pass editor review. [`PerplexityClient`] is the production
//! transport; tests substitute scripted fakes.

mod completion;
mod error;
mod http;

pub use completion::{ChatCompletion, host_of, parse_completion};
pub use error::ClientError;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use facty_config::PerplexityConfig;
use facty_core::enums::RecencyWindow;
use serde::Serialize;

// ── Types ──────────────────────────────────────────────────────────

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// One chat-completion request.
///
/// `timeout` applies to the single HTTP exchange and is not sent to the
/// service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_citations: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_recency_filter: Option<RecencyWindow>,
    #[serde(skip)]
    pub timeout: Duration,
}

impl ChatRequest {
    /// A system + user exchange with neutral sampling settings and no search
    /// options.
    #[must_use]
    pub fn new(model: impl Into<String>, system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: vec![
                ChatMessage {
                    role: Role::System,
                    content: system.into(),
                },
                ChatMessage {
                    role: Role::User,
                    content: user.into(),
                },
            ],
            temperature: 0.2,
            max_tokens: 1000,
            return_citations: None,
            search_recency_filter: None,
            timeout: Duration::from_secs(60),
        }
    }

    #[must_use]
    pub const fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    #[must_use]
    pub const fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Ask for native citations, restricted to sources within `window`.
    #[must_use]
    pub const fn with_search(mut self, window: RecencyWindow) -> Self {
        self.return_citations = Some(true);
        self.search_recency_filter = Some(window);
        self
    }

    /// Content of the user message.
    #[must_use]
    pub fn user_prompt(&self) -> &str {
        self.messages
            .iter()
            .find(|m| m.role == Role::User)
            .map_or("", |m| m.content.as_str())
    }
}

// ── Transport ──────────────────────────────────────────────────────

/// Sends one chat-completion request and returns the text plus any native
/// citations.
pub trait ChatTransport: Send + Sync {
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, non-success status or a
    /// body without message content.
    fn complete(
        &self,
        request: &ChatRequest,
    ) -> impl Future<Output = Result<ChatCompletion, ClientError>> + Send;
}

impl<T: ChatTransport> ChatTransport for Arc<T> {
    fn complete(
        &self,
        request: &ChatRequest,
    ) -> impl Future<Output = Result<ChatCompletion, ClientError>> + Send {
        (**self).complete(request)
    }
}

impl<T: ChatTransport> ChatTransport for &T {
    fn complete(
        &self,
        request: &ChatRequest,
    ) -> impl Future<Output = Result<ChatCompletion, ClientError>> + Send {
        (**self).complete(request)
    }
}

// ── Client ─────────────────────────────────────────────────────────

/// HTTP transport for the Perplexity chat-completions endpoint.
pub struct PerplexityClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl std::fmt::Debug for PerplexityClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PerplexityClient")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"[redacted]")
            .finish_non_exhaustive()
    }
}

impl PerplexityClient {
    /// Build a client from the `[perplexity]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingApiKey`] if no credential is configured,
    /// or [`ClientError::Http`] if the underlying `reqwest::Client` fails to
    /// build.
    pub fn new(config: &PerplexityConfig) -> Result<Self, ClientError> {
        if !config.is_configured() {
            return Err(ClientError::MissingApiKey);
        }
        let http = reqwest::Client::builder()
            .user_agent(concat!("facty/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.trim().to_string(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ChatTransport for PerplexityClient {
    async fn complete(&self, request: &ChatRequest) -> Result<ChatCompletion, ClientError> {
        tracing::debug!(
            model = %request.model,
            max_tokens = request.max_tokens,
            timeout_secs = request.timeout.as_secs(),
            "sending chat completion"
        );
        let resp = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .timeout(request.timeout)
            .json(request)
            .send()
            .await?;
        let resp = http::check_response(resp).await?;
        let body = resp.text().await?;
        let completion = parse_completion(&body)?;
        tracing::debug!(
            citations = completion.citations.len(),
            "chat completion received"
        );
        Ok(completion)
    }
}
