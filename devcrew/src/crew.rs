//! Sequential crew execution.
//!
//! A crew is an ordered list of tasks with a fixed agent set. Running it
//! issues one blocking backend call per task, strictly in declared order,
//! threading each task's text output into the next task's prompt as
//! opaque context. There is no retry, no timeout and no partial-result
//! recovery: the first failed call aborts the run.

use std::fmt;

use anyhow::{bail, Result};
use uuid::Uuid;

use crate::agent::Agent;
use crate::tasks::Task;

/// Execution policy. Only sequential execution exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Process {
    Sequential,
}

/// An ordered group of tasks executed against their bound agents.
#[derive(Debug, Clone)]
pub struct Crew {
    pub agents: Vec<Agent>,
    pub tasks: Vec<Task>,
    pub process: Process,
    pub verbose: bool,
}

impl Crew {
    /// Create a sequential crew.
    pub fn new(agents: Vec<Agent>, tasks: Vec<Task>) -> Self {
        Self {
            agents,
            tasks,
            process: Process::Sequential,
            verbose: true,
        }
    }

    /// Control per-task progress output.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Run every task in declared order and collect the outputs.
    ///
    /// Each task's output becomes context for the task after it. The
    /// report's display form is the final task's text, which is what a
    /// caller threading stages together wants.
    pub async fn run(&self) -> Result<CrewReport> {
        if self.tasks.is_empty() {
            bail!("crew has no tasks to run");
        }

        let run_id = Uuid::new_v4();
        let mut outputs = Vec::with_capacity(self.tasks.len());
        let mut previous: Option<String> = None;

        for (index, task) in self.tasks.iter().enumerate() {
            let role = task.agent.role();

            if self.verbose {
                println!(
                    "[{}/{}] {} working...",
                    index + 1,
                    self.tasks.len(),
                    role.name
                );
            }
            tracing::info!(
                run_id = %run_id,
                task = index + 1,
                total = self.tasks.len(),
                role = role.id.as_str(),
                "executing task"
            );

            let output = task
                .agent
                .perform(&task.description, &task.expected_output, previous.as_deref())
                .await?;

            previous = Some(output.clone());
            outputs.push(TaskOutput {
                role: role.name.to_string(),
                output,
            });
        }

        Ok(CrewReport { run_id, outputs })
    }
}

/// The output of one executed task.
#[derive(Debug, Clone, serde::Serialize)]
pub struct TaskOutput {
    /// Display name of the role that produced the output.
    pub role: String,
    /// The model's reply, kept as opaque text.
    pub output: String,
}

/// Everything a crew run produced.
#[derive(Debug, Clone, serde::Serialize)]
pub struct CrewReport {
    pub run_id: Uuid,
    pub outputs: Vec<TaskOutput>,
}

impl CrewReport {
    /// The last task's output, the stage result callers thread onward.
    pub fn final_output(&self) -> &str {
        self.outputs
            .last()
            .map(|o| o.output.as_str())
            .unwrap_or_default()
    }
}

impl fmt::Display for CrewReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.final_output())
    }
}
