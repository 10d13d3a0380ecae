//! The provider seam: one `invoke` operation over any text-generation backend.

use async_trait::async_trait;

use crate::error::Result;

/// Generation settings shared by all providers.
///
/// Providers translate these into their own wire fields; a provider that
/// does not support a setting ignores it.
#[derive(Debug, Clone)]
pub struct GenerationParams {
    /// Sampling temperature.
    pub temperature: f32,
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 4096,
        }
    }
}

/// A text-generation backend.
///
/// Implementations send one user prompt and return the reply as plain
/// text. There is deliberately no streaming, no tool use, and no
/// multi-turn state here: every call is a single prompt in, single text
/// out exchange.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send `prompt` and return the generated text.
    async fn invoke(&self, prompt: &str, params: &GenerationParams) -> Result<String>;

    /// Short provider identifier for logs and diagnostics.
    fn name(&self) -> &'static str;
}
