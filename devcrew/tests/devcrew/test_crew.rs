//! Crew execution: order preservation, context threading, failure
//! propagation.

use devcrew::agent::Agent;
use devcrew::crew::Crew;
use devcrew::roles::RoleId;
use devcrew::tasks::Task;
use devcrew_llm::LlmClient;

use super::common::{AlwaysFailingProvider, RecordingProvider};

fn crew_of(tasks: Vec<Task>) -> Crew {
    let agents = tasks.iter().map(|t| t.agent.clone()).collect();
    Crew::new(agents, tasks).with_verbose(false)
}

#[tokio::test]
async fn test_tasks_execute_in_declared_order() {
    let (provider, prompts) = RecordingProvider::new();
    let client = LlmClient::new(provider);

    let tasks = vec![
        Task::new(
            Agent::new(RoleId::ProjectManager, client.clone()),
            "first task",
            "out",
        ),
        Task::new(
            Agent::new(RoleId::RequirementsAnalyst, client.clone()),
            "second task",
            "out",
        ),
        Task::new(
            Agent::new(RoleId::SystemArchitect, client),
            "third task",
            "out",
        ),
    ];

    let report = crew_of(tasks).run().await.unwrap();

    let prompts = prompts.lock().unwrap();
    assert_eq!(prompts.len(), 3);
    assert!(prompts[0].contains("first task"));
    assert!(prompts[1].contains("second task"));
    assert!(prompts[2].contains("third task"));

    assert_eq!(report.outputs.len(), 3);
    assert_eq!(report.final_output(), "reply 3");
}

#[tokio::test]
async fn test_previous_output_threads_into_next_prompt() {
    let (provider, prompts) = RecordingProvider::new();
    let client = LlmClient::new(provider);

    let tasks = vec![
        Task::new(
            Agent::new(RoleId::RequirementsAnalyst, client.clone()),
            "analyze",
            "out",
        ),
        Task::new(Agent::new(RoleId::SystemArchitect, client), "design", "out"),
    ];

    crew_of(tasks).run().await.unwrap();

    let prompts = prompts.lock().unwrap();
    assert!(!prompts[0].contains("Context from the previous task"));
    assert!(prompts[1].contains("Context from the previous task"));
    assert!(prompts[1].contains("reply 1"));
}

#[tokio::test]
async fn test_first_failure_aborts_the_run() {
    let client = LlmClient::new(AlwaysFailingProvider);
    let tasks = vec![
        Task::new(Agent::new(RoleId::Developer, client.clone()), "plan", "out"),
        Task::new(Agent::new(RoleId::Developer, client), "implement", "out"),
    ];

    let result = crew_of(tasks).run().await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_masked_failures_keep_the_crew_running() {
    let client = LlmClient::new(AlwaysFailingProvider).mask_failures(true);
    let tasks = vec![
        Task::new(Agent::new(RoleId::Developer, client.clone()), "plan", "out"),
        Task::new(Agent::new(RoleId::Developer, client), "implement", "out"),
    ];

    let report = crew_of(tasks).run().await.unwrap();
    assert_eq!(report.outputs.len(), 2);
    assert!(report.final_output().starts_with("[simulated response]"));
}
