//! Non-functional fallback provider.

use async_trait::async_trait;

use crate::error::Result;
use crate::provider::{ChatProvider, GenerationParams};

/// Canned reply returned for every prompt when no real backend is available.
pub const MOCK_REPLY: &str =
    "[mock response] no LLM provider is configured; set GOOGLE_API_KEY or OPENAI_API_KEY \
     to get real output";

/// Provider of last resort: always answers with a constant placeholder.
///
/// Entry points that prefer degraded output over a startup failure resolve
/// to this when no credentials are present.
pub struct MockProvider;

#[async_trait]
impl ChatProvider for MockProvider {
    async fn invoke(&self, _prompt: &str, _params: &GenerationParams) -> Result<String> {
        Ok(MOCK_REPLY.to_string())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_always_answers_with_constant() {
        let provider = MockProvider;
        let params = GenerationParams::default();

        let first = provider.invoke("design a system", &params).await.unwrap();
        let second = provider.invoke("", &params).await.unwrap();

        assert_eq!(first, MOCK_REPLY);
        assert_eq!(second, MOCK_REPLY);
        assert_eq!(provider.name(), "mock");
    }
}
