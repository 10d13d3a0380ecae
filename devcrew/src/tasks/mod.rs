//! The task template library.
//!
//! One pure function per (stage, sub-task) pair. Each function
//! interpolates caller-supplied context strings into a fixed instruction
//! block plus a fixed expected-output checklist and binds the task to an
//! agent. Nothing is validated or transformed: empty or garbage context
//! is interpolated as-is, and the model's reply is never parsed.

pub mod deployment;
pub mod development;
pub mod project_management;
pub mod requirements;
pub mod system_design;
pub mod testing;

use crate::agent::Agent;

/// One templated prompt instance bound to an agent.
#[derive(Debug, Clone)]
pub struct Task {
    /// The filled-in instruction block.
    pub description: String,
    /// Checklist describing what the reply should contain.
    pub expected_output: String,
    /// The agent this task runs against.
    pub agent: Agent,
}

impl Task {
    pub fn new(
        agent: Agent,
        description: impl Into<String>,
        expected_output: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            expected_output: expected_output.into(),
            agent,
        }
    }
}
