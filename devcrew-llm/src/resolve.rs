//! Provider resolution.
//!
//! Selection is an explicit ordered probe over available credentials
//! rather than scattered construction attempts: Gemini wins when a Google
//! key is present, the OpenAI-compatible backend is next, and entry
//! points choose between a hard error and the mock fallback when neither
//! key exists.

use crate::error::{LlmError, Result};
use crate::gemini::GeminiProvider;
use crate::mock::MockProvider;
use crate::openai::OpenAiProvider;
use crate::provider::ChatProvider;

/// Environment variable holding the Google API key.
pub const GOOGLE_API_KEY_VAR: &str = "GOOGLE_API_KEY";

/// Environment variable holding the OpenAI API key.
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Credentials gathered once at startup; never re-read afterwards.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub google_api_key: Option<String>,
    pub openai_api_key: Option<String>,
}

impl Credentials {
    /// Read both key variables from the environment. Empty values count
    /// as absent.
    pub fn from_env() -> Self {
        Self {
            google_api_key: read_var(GOOGLE_API_KEY_VAR),
            openai_api_key: read_var(OPENAI_API_KEY_VAR),
        }
    }

    /// Whether any real provider can be constructed.
    pub fn any(&self) -> bool {
        self.google_api_key.is_some() || self.openai_api_key.is_some()
    }
}

fn read_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Pick the first available provider, in fixed priority order.
///
/// # Errors
///
/// Returns [`LlmError::MissingCredentials`] when neither key is present.
pub fn resolve(credentials: &Credentials) -> Result<Box<dyn ChatProvider>> {
    if let Some(key) = &credentials.google_api_key {
        return Ok(Box::new(GeminiProvider::new(key.clone())));
    }
    if let Some(key) = &credentials.openai_api_key {
        return Ok(Box::new(OpenAiProvider::new(key.clone())));
    }
    Err(LlmError::MissingCredentials)
}

/// Like [`resolve`], but substitute the non-functional mock instead of
/// failing when no credentials are present.
pub fn resolve_or_mock(credentials: &Credentials) -> Box<dyn ChatProvider> {
    match resolve(credentials) {
        Ok(provider) => provider,
        Err(_) => {
            tracing::warn!("no LLM credentials found, falling back to mock provider");
            Box::new(MockProvider)
        }
    }
}
