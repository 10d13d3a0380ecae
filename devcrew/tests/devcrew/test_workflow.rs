//! Workflow orchestration: stage crew construction and the documented
//! placeholder behavior of the single-crew pipeline.

use devcrew::roles::RoleId;
use devcrew::workflow::{
    DevWorkflow, Stage, DESIGN_OUTPUT_PLACEHOLDER, REQUIREMENTS_OUTPUT_PLACEHOLDER,
};
use devcrew_llm::{LlmClient, MockProvider};

fn workflow() -> DevWorkflow {
    DevWorkflow::new(LlmClient::new(MockProvider))
}

#[test]
fn test_stage_crews_bind_one_task_to_the_right_role() {
    let wf = workflow();

    let crew = wf.initiation_crew("a project", "the stakeholders");
    assert_eq!(crew.tasks.len(), 1);
    assert_eq!(crew.tasks[0].agent.role().id, RoleId::ProjectManager);
    assert!(crew.tasks[0].description.contains("a project"));
    assert!(crew.tasks[0].description.contains("the stakeholders"));

    let crew = wf.requirements_crew("a project");
    assert_eq!(crew.tasks.len(), 1);
    assert_eq!(crew.tasks[0].agent.role().id, RoleId::RequirementsAnalyst);

    let crew = wf.design_crew("the requirements");
    assert_eq!(crew.tasks[0].agent.role().id, RoleId::SystemArchitect);
    assert!(crew.tasks[0].description.contains("the requirements"));

    let crew = wf.testing_crew("req doc", "arch doc");
    assert_eq!(crew.tasks[0].agent.role().id, RoleId::TestEngineer);

    let crew = wf.deployment_crew("arch doc", "env reqs");
    assert_eq!(crew.tasks[0].agent.role().id, RoleId::DevopsEngineer);
}

#[test]
fn test_development_crew_adds_implementation_only_with_both_specs() {
    let wf = workflow();

    let planning_only = wf.development_crew("tech spec", "", "");
    assert_eq!(planning_only.tasks.len(), 1);

    let missing_task_desc = wf.development_crew("tech spec", "module spec", "");
    assert_eq!(missing_task_desc.tasks.len(), 1);

    let both = wf.development_crew("tech spec", "module spec", "implement login");
    assert_eq!(both.tasks.len(), 2);
    assert!(both.tasks[1].description.contains("module spec"));
    assert!(both.tasks[1].description.contains("implement login"));
}

#[test]
fn test_full_pipeline_builds_six_tasks_in_lifecycle_order() {
    let wf = workflow();
    let crew = wf.full_pipeline_crew("a project");

    assert_eq!(crew.tasks.len(), 6);
    assert_eq!(crew.agents.len(), 6);

    let roles: Vec<RoleId> = crew.tasks.iter().map(|t| t.agent.role().id).collect();
    assert_eq!(
        roles,
        vec![
            RoleId::ProjectManager,
            RoleId::RequirementsAnalyst,
            RoleId::SystemArchitect,
            RoleId::Developer,
            RoleId::TestEngineer,
            RoleId::DevopsEngineer,
        ]
    );
}

#[test]
fn test_full_pipeline_downstream_tasks_carry_literal_placeholders() {
    // The up-front pipeline builds later tasks before any upstream output
    // exists: their descriptions must contain the unresolved tokens, not
    // real documents.
    let wf = workflow();
    let crew = wf.full_pipeline_crew("a project");

    let design = &crew.tasks[2].description;
    let development = &crew.tasks[3].description;
    let testing = &crew.tasks[4].description;
    let deployment = &crew.tasks[5].description;

    assert!(design.contains(REQUIREMENTS_OUTPUT_PLACEHOLDER));
    assert!(development.contains(DESIGN_OUTPUT_PLACEHOLDER));
    assert!(testing.contains(REQUIREMENTS_OUTPUT_PLACEHOLDER));
    assert!(testing.contains(DESIGN_OUTPUT_PLACEHOLDER));
    assert!(deployment.contains(DESIGN_OUTPUT_PLACEHOLDER));

    // The first two tasks run on real caller input.
    assert!(crew.tasks[0].description.contains("a project"));
    assert!(crew.tasks[1].description.contains("a project"));
    assert!(!crew.tasks[1].description.contains(REQUIREMENTS_OUTPUT_PLACEHOLDER));
}

#[test]
fn test_stage_menu_mapping() {
    assert_eq!(Stage::from_menu_choice("1"), Some(Stage::Initiation));
    assert_eq!(Stage::from_menu_choice(" 6 "), Some(Stage::Deployment));
    assert_eq!(Stage::from_menu_choice("7"), None);
    assert_eq!(Stage::from_menu_choice("abc"), None);

    assert_eq!(Stage::all().len(), 6);
    assert_eq!(Stage::Requirements.slug(), "requirements");
    assert_eq!(Stage::Design.to_string(), "System Design");
}

#[test]
fn test_workflow_agent_lookup() {
    let wf = workflow();
    for id in RoleId::all() {
        assert_eq!(wf.agent(id).role().id, id);
    }
}
