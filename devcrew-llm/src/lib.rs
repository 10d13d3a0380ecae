//! LLM adapter for the devcrew virtual software team.
//!
//! Normalizes whichever text-generation backend is configured behind a
//! single `invoke(prompt) -> text` operation. Provider selection happens
//! once, at construction, by probing credentials in a fixed priority
//! order: Gemini, then an OpenAI-compatible endpoint, then (only for
//! entry points that opt in) a non-functional mock.
//!
//! ```no_run
//! use devcrew_llm::LlmClient;
//!
//! # async fn example() -> devcrew_llm::Result<()> {
//! let client = LlmClient::from_env()?;
//! let reply = client.invoke("Summarize the project goals.").await?;
//! println!("{reply}");
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod gemini;
mod mock;
mod openai;
mod provider;
mod resolve;

pub use client::{simulated_response, LlmClient};
pub use error::{LlmError, Result};
pub use gemini::GeminiProvider;
pub use mock::{MockProvider, MOCK_REPLY};
pub use openai::OpenAiProvider;
pub use provider::{ChatProvider, GenerationParams};
pub use resolve::{
    resolve, resolve_or_mock, Credentials, GOOGLE_API_KEY_VAR, OPENAI_API_KEY_VAR,
};
