//! Error types for the LLM adapter.

use thiserror::Error;

/// Errors surfaced by providers and the client.
#[derive(Debug, Error)]
pub enum LlmError {
    /// Neither provider credential is present in the environment.
    #[error("no LLM credentials found: set GOOGLE_API_KEY or OPENAI_API_KEY")]
    MissingCredentials,

    /// Transport-level failure (connection, TLS, timeout, body decode).
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("{provider} API error ({status}): {message}")]
    Api {
        provider: &'static str,
        status: u16,
        message: String,
    },

    /// The backend answered successfully but returned no usable text.
    #[error("empty response from {0}")]
    EmptyResponse(&'static str),
}

pub type Result<T> = std::result::Result<T, LlmError>;
