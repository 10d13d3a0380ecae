//! Templating completeness: every stage-task constructor must carry each
//! supplied context string into the task description verbatim and bind
//! the agent it was given.

use devcrew::roles::RoleId;
use devcrew::tasks::{
    deployment, development, project_management, requirements, system_design, testing,
};

use super::common::mock_agent;

#[test]
fn test_requirements_tasks_interpolate_context() {
    let agent = mock_agent(RoleId::RequirementsAnalyst);

    let task = requirements::requirements_analysis(agent.clone(), "Build a library system");
    assert!(task.description.contains("Build a library system"));
    assert_eq!(task.agent.role().id, RoleId::RequirementsAnalyst);
    assert!(!task.expected_output.is_empty());

    let task = requirements::requirements_review(agent, "REQ DOC v1");
    assert!(task.description.contains("REQ DOC v1"));
}

#[test]
fn test_design_tasks_interpolate_context() {
    let agent = mock_agent(RoleId::SystemArchitect);

    let task = system_design::system_design(agent.clone(), "the requirements doc");
    assert!(task.description.contains("the requirements doc"));
    assert_eq!(task.agent.role().id, RoleId::SystemArchitect);

    let task = system_design::architecture_review(agent.clone(), "ARCH DOC v2");
    assert!(task.description.contains("ARCH DOC v2"));

    let task = system_design::technical_specification(agent, "ARCH DOC v3");
    assert!(task.description.contains("ARCH DOC v3"));
}

#[test]
fn test_development_tasks_interpolate_context() {
    let agent = mock_agent(RoleId::Developer);

    let task = development::development_planning(agent.clone(), "TECH SPEC");
    assert!(task.description.contains("TECH SPEC"));

    let task = development::code_implementation(agent.clone(), "MODULE SPEC", "TASK DESC");
    assert!(task.description.contains("MODULE SPEC"));
    assert!(task.description.contains("TASK DESC"));

    let task = development::code_review(agent.clone(), "src/billing.rs");
    assert!(task.description.contains("src/billing.rs"));

    let task = development::module_integration(agent, "auth + billing modules");
    assert!(task.description.contains("auth + billing modules"));
}

#[test]
fn test_testing_tasks_interpolate_context() {
    let agent = mock_agent(RoleId::TestEngineer);

    let task = testing::test_planning(agent.clone(), "REQ DOC", "ARCH DOC");
    assert!(task.description.contains("REQ DOC"));
    assert!(task.description.contains("ARCH DOC"));

    let task = testing::test_case_design(agent.clone(), "TEST PLAN", "MODULE SPEC");
    assert!(task.description.contains("TEST PLAN"));
    assert!(task.description.contains("MODULE SPEC"));

    let task = testing::test_execution(agent.clone(), "CASES", "v1.2.3");
    assert!(task.description.contains("CASES"));
    assert!(task.description.contains("v1.2.3"));

    let task = testing::regression_testing(agent.clone(), "OLD RESULTS", "NEW CHANGES");
    assert!(task.description.contains("OLD RESULTS"));
    assert!(task.description.contains("NEW CHANGES"));

    let task = testing::performance_testing(agent, "PERF REQS", "SYS ARCH");
    assert!(task.description.contains("PERF REQS"));
    assert!(task.description.contains("SYS ARCH"));
}

#[test]
fn test_deployment_tasks_interpolate_context() {
    let agent = mock_agent(RoleId::DevopsEngineer);

    let task = deployment::deployment_planning(agent.clone(), "ARCH DOC", "ENV REQS");
    assert!(task.description.contains("ARCH DOC"));
    assert!(task.description.contains("ENV REQS"));

    let task = deployment::cicd_setup(agent.clone(), "DEPLOY PLAN", "git@example.com:repo.git");
    assert!(task.description.contains("DEPLOY PLAN"));
    assert!(task.description.contains("git@example.com:repo.git"));

    let task = deployment::infrastructure_setup(agent.clone(), "DEPLOY ARCH");
    assert!(task.description.contains("DEPLOY ARCH"));

    let task = deployment::monitoring_setup(agent.clone(), "SYS ARCH", "PERF REQS");
    assert!(task.description.contains("SYS ARCH"));
    assert!(task.description.contains("PERF REQS"));

    let task = deployment::security_hardening(agent.clone(), "SEC REQS", "DEPLOY CONFIG");
    assert!(task.description.contains("SEC REQS"));
    assert!(task.description.contains("DEPLOY CONFIG"));

    let task = deployment::production_deployment(agent, "PACKAGE v9", "ENV CONFIG");
    assert!(task.description.contains("PACKAGE v9"));
    assert!(task.description.contains("ENV CONFIG"));
}

#[test]
fn test_project_management_tasks_interpolate_context() {
    let agent = mock_agent(RoleId::ProjectManager);

    let task =
        project_management::project_initiation(agent.clone(), "PROJECT DESC", "STAKEHOLDERS");
    assert!(task.description.contains("PROJECT DESC"));
    assert!(task.description.contains("STAKEHOLDERS"));
    assert_eq!(task.agent.role().id, RoleId::ProjectManager);

    let task = project_management::project_planning(agent.clone(), "CHARTER", "TEAM CAPACITY");
    assert!(task.description.contains("CHARTER"));
    assert!(task.description.contains("TEAM CAPACITY"));

    let task = project_management::progress_monitoring(agent.clone(), "PLAN", "STATUS");
    assert!(task.description.contains("PLAN"));
    assert!(task.description.contains("STATUS"));

    let task = project_management::risk_management(agent.clone(), "RISK REGISTER", "CONTEXT");
    assert!(task.description.contains("RISK REGISTER"));
    assert!(task.description.contains("CONTEXT"));

    let task = project_management::quality_assurance(agent.clone(), "QUALITY PLAN", "DELIVERABLES");
    assert!(task.description.contains("QUALITY PLAN"));
    assert!(task.description.contains("DELIVERABLES"));

    let task =
        project_management::stakeholder_communication(agent.clone(), "COMM PLAN", "UPDATES");
    assert!(task.description.contains("COMM PLAN"));
    assert!(task.description.contains("UPDATES"));

    let task = project_management::project_closure(agent, "DELIVERABLES", "LESSONS");
    assert!(task.description.contains("DELIVERABLES"));
    assert!(task.description.contains("LESSONS"));
}

#[test]
fn test_empty_context_is_interpolated_as_is() {
    // No validation: an empty context string produces a well-formed task
    // whose description simply has nothing at the interpolation point.
    let agent = mock_agent(RoleId::RequirementsAnalyst);
    let task = requirements::requirements_analysis(agent, "");
    assert!(task.description.contains("Project description: \n"));
}
