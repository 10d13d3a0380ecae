//! Shared test utilities.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use devcrew::agent::Agent;
use devcrew::roles::RoleId;
use devcrew_llm::{ChatProvider, GenerationParams, LlmClient, LlmError, MockProvider};

/// Provider that records every prompt it receives and answers with
/// `reply <n>` for the n-th call.
pub struct RecordingProvider {
    prompts: Arc<Mutex<Vec<String>>>,
}

impl RecordingProvider {
    pub fn new() -> (Self, Arc<Mutex<Vec<String>>>) {
        let prompts = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                prompts: prompts.clone(),
            },
            prompts,
        )
    }
}

#[async_trait]
impl ChatProvider for RecordingProvider {
    async fn invoke(
        &self,
        prompt: &str,
        _params: &GenerationParams,
    ) -> devcrew_llm::Result<String> {
        let mut prompts = self.prompts.lock().unwrap();
        prompts.push(prompt.to_string());
        Ok(format!("reply {}", prompts.len()))
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

/// Provider that fails every call.
pub struct AlwaysFailingProvider;

#[async_trait]
impl ChatProvider for AlwaysFailingProvider {
    async fn invoke(
        &self,
        _prompt: &str,
        _params: &GenerationParams,
    ) -> devcrew_llm::Result<String> {
        Err(LlmError::Api {
            provider: "always-failing",
            status: 503,
            message: "unavailable".to_string(),
        })
    }

    fn name(&self) -> &'static str {
        "always-failing"
    }
}

/// An agent over the non-functional mock backend.
pub fn mock_agent(role: RoleId) -> Agent {
    Agent::new(role, LlmClient::new(MockProvider))
}
