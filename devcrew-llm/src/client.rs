//! The client handle handed to agents.

use std::fmt;
use std::sync::Arc;

use crate::error::{LlmError, Result};
use crate::provider::{ChatProvider, GenerationParams};
use crate::resolve::{resolve, resolve_or_mock, Credentials};

/// Shared handle over one resolved provider plus generation settings.
///
/// Cloning is cheap; every agent in a workflow holds a clone of the same
/// client. Configuration is fixed at construction and never mutated.
///
/// Failure behavior is configurable: by default a provider error
/// propagates to the caller, but with [`mask_failures`](Self::mask_failures)
/// enabled the client swallows the error and returns a templated
/// `[simulated response]` string instead, so a broken backend degrades
/// into placeholder output rather than aborting the run. Both behaviors
/// exist because different entry points want different ones; pick
/// deliberately.
#[derive(Clone)]
pub struct LlmClient {
    provider: Arc<dyn ChatProvider>,
    params: GenerationParams,
    mask_failures: bool,
}

impl LlmClient {
    /// Wrap a provider with default generation settings.
    pub fn new(provider: impl ChatProvider + 'static) -> Self {
        Self::from_boxed(Box::new(provider))
    }

    /// Wrap an already-boxed provider (as returned by resolution).
    pub fn from_boxed(provider: Box<dyn ChatProvider>) -> Self {
        Self {
            provider: Arc::from(provider),
            params: GenerationParams::default(),
            mask_failures: false,
        }
    }

    /// Resolve a provider from the environment; fails without credentials.
    pub fn from_env() -> Result<Self> {
        Ok(Self::from_boxed(resolve(&Credentials::from_env())?))
    }

    /// Resolve a provider from the environment, degrading to the mock
    /// provider when no credentials are present.
    pub fn from_env_or_mock() -> Self {
        Self::from_boxed(resolve_or_mock(&Credentials::from_env()))
    }

    /// Replace the generation settings.
    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.params.temperature = temperature;
        self
    }

    /// Set the generated-token cap.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.params.max_tokens = max_tokens;
        self
    }

    /// Swallow provider failures and answer with a simulated response.
    pub fn mask_failures(mut self, mask: bool) -> Self {
        self.mask_failures = mask;
        self
    }

    /// Name of the resolved provider.
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Send one prompt and return the generated text.
    pub async fn invoke(&self, prompt: &str) -> Result<String> {
        match self.provider.invoke(prompt, &self.params).await {
            Ok(text) => Ok(text),
            Err(err) if self.mask_failures => {
                tracing::warn!(
                    provider = self.provider.name(),
                    error = %err,
                    "provider call failed, substituting simulated response"
                );
                Ok(simulated_response(prompt, &err))
            }
            Err(err) => Err(err),
        }
    }
}

impl fmt::Debug for LlmClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmClient")
            .field("provider", &self.provider.name())
            .field("params", &self.params)
            .field("mask_failures", &self.mask_failures)
            .finish()
    }
}

/// Placeholder text substituted for a failed call when masking is on.
///
/// Keeps a short prefix of the prompt so the stand-in is traceable to the
/// request that produced it.
pub fn simulated_response(prompt: &str, err: &LlmError) -> String {
    let preview: String = prompt.chars().take(50).collect();
    format!(
        "[simulated response] the provider call failed ({err}); this is a stand-in reply for: {preview}..."
    )
}
