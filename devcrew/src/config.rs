//! Runtime configuration.
//!
//! Read once at startup and never mutated. Generation and agent defaults
//! live here; credentials are probed from the environment when the
//! client is built.

use devcrew_llm::{Credentials, GenerationParams, LlmClient, Result as LlmResult};

/// Defaults applied to every agent the workflow creates.
///
/// Delegation is not configurable here: it is a property of the role
/// (the project manager delegates, nobody else does).
#[derive(Debug, Clone)]
pub struct AgentDefaults {
    pub max_iter: u32,
    pub memory: bool,
    pub verbose: bool,
}

impl Default for AgentDefaults {
    fn default() -> Self {
        Self {
            max_iter: 3,
            memory: true,
            verbose: true,
        }
    }
}

/// Top-level configuration for a workflow run.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Generation settings for every backend call.
    pub generation: GenerationConfig,
    /// Agent construction defaults.
    pub agent: AgentDefaults,
}

/// Sampling settings applied to every call.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 4096,
        }
    }
}

impl Config {
    /// Resolve a provider from the environment and apply the generation
    /// settings. Fails when neither API key is configured.
    pub fn client(&self) -> LlmResult<LlmClient> {
        Ok(LlmClient::from_env()?.with_params(GenerationParams {
            temperature: self.generation.temperature,
            max_tokens: self.generation.max_tokens,
        }))
    }

    /// Whether any real provider credential is configured.
    pub fn credentials_present(&self) -> bool {
        Credentials::from_env().any()
    }
}
