//! The agent factory.
//!
//! An agent binds one role persona to an LLM handle. Agents carry no
//! state across runs; `max_iter` and `memory` are configuration carried
//! for the backend's benefit, not interpreted here.

use anyhow::{Context, Result};
use devcrew_llm::LlmClient;

use crate::roles::{Role, RoleId};

/// A role persona bound to an LLM backend.
///
/// Cloning is cheap: the role record is static and the client handle is
/// shared.
#[derive(Debug, Clone)]
pub struct Agent {
    role: &'static Role,
    llm: LlmClient,
    /// Iteration cap handed to the backend.
    pub max_iter: u32,
    /// Whether this agent may delegate work to other agents.
    pub allow_delegation: bool,
    /// Whether backend-side memory is enabled for this agent.
    pub memory: bool,
    /// Names of extra tools available to this agent.
    pub tools: Vec<String>,
}

impl Agent {
    /// Create an agent for `role_id` bound to `llm`.
    ///
    /// Only the project manager is allowed to delegate; every other role
    /// works its own tasks.
    pub fn new(role_id: RoleId, llm: LlmClient) -> Self {
        Self {
            role: Role::get(role_id),
            llm,
            max_iter: 3,
            allow_delegation: role_id == RoleId::ProjectManager,
            memory: true,
            tools: Vec::new(),
        }
    }

    /// Attach extra tool names to this agent.
    pub fn with_tools(mut self, tools: Vec<String>) -> Self {
        self.tools = tools;
        self
    }

    /// Override the backend iteration cap.
    pub fn with_max_iter(mut self, max_iter: u32) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Enable or disable backend-side memory.
    pub fn with_memory(mut self, memory: bool) -> Self {
        self.memory = memory;
        self
    }

    /// The persona this agent plays.
    pub fn role(&self) -> &'static Role {
        self.role
    }

    /// Execute one task: compose the persona framing with the task
    /// description and expected-output checklist, optionally append the
    /// previous task's output as context, and make a single blocking
    /// call to the backend.
    pub async fn perform(
        &self,
        description: &str,
        expected_output: &str,
        context: Option<&str>,
    ) -> Result<String> {
        let prompt = self.compose_prompt(description, expected_output, context);

        tracing::debug!(
            role = self.role.id.as_str(),
            prompt_len = prompt.len(),
            "invoking backend"
        );

        self.llm
            .invoke(&prompt)
            .await
            .with_context(|| format!("{} failed to complete the task", self.role.name))
    }

    fn compose_prompt(
        &self,
        description: &str,
        expected_output: &str,
        context: Option<&str>,
    ) -> String {
        let mut prompt = format!(
            "You are the team's {role}.\nGoal: {goal}\n\n{backstory}\n",
            role = self.role.name,
            goal = self.role.goal,
            backstory = self.role.backstory,
        );

        if !self.tools.is_empty() {
            prompt.push_str(&format!("\nAvailable tools: {}\n", self.tools.join(", ")));
        }

        prompt.push_str(&format!(
            "\nCurrent task:\n{description}\n\nExpected output:\n{expected_output}\n"
        ));

        if let Some(context) = context {
            prompt.push_str(&format!("\nContext from the previous task:\n{context}\n"));
        }

        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devcrew_llm::MockProvider;

    fn mock_agent(role_id: RoleId) -> Agent {
        Agent::new(role_id, LlmClient::new(MockProvider))
    }

    #[test]
    fn test_only_project_manager_delegates() {
        assert!(mock_agent(RoleId::ProjectManager).allow_delegation);
        for id in [
            RoleId::RequirementsAnalyst,
            RoleId::SystemArchitect,
            RoleId::Developer,
            RoleId::TestEngineer,
            RoleId::DevopsEngineer,
        ] {
            assert!(!mock_agent(id).allow_delegation, "{id} should not delegate");
        }
    }

    #[test]
    fn test_agent_defaults() {
        let agent = mock_agent(RoleId::Developer);
        assert_eq!(agent.max_iter, 3);
        assert!(agent.memory);
        assert!(agent.tools.is_empty());
    }

    #[test]
    fn test_prompt_contains_persona_and_task() {
        let agent = mock_agent(RoleId::RequirementsAnalyst);
        let prompt = agent.compose_prompt("Analyze the project", "A requirements doc", None);

        assert!(prompt.contains("Requirements Analyst"));
        assert!(prompt.contains(agent.role().goal));
        assert!(prompt.contains("Analyze the project"));
        assert!(prompt.contains("A requirements doc"));
        assert!(!prompt.contains("Context from the previous task"));
    }

    #[test]
    fn test_prompt_appends_context_and_tools() {
        let agent = mock_agent(RoleId::SystemArchitect)
            .with_tools(vec!["diagram".to_string(), "search".to_string()]);
        let prompt = agent.compose_prompt("Design it", "An architecture doc", Some("prior text"));

        assert!(prompt.contains("Available tools: diagram, search"));
        assert!(prompt.contains("Context from the previous task:\nprior text"));
    }
}
