//! Client error types.

use thiserror::Error;

/// Errors that can occur when talking to the chat-completion service.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error (connect failure, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// The service's `error.message`, or the raw body.
        message: String,
    },

    /// The service returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// The response body did not have the chat-completion shape.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// No API credential is configured. Raised before any request is built.
    #[error("API key not configured (set FACTY_PERPLEXITY__API_KEY)")]
    MissingApiKey,
}
