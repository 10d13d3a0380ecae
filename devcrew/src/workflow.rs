//! The workflow orchestrator.
//!
//! `DevWorkflow` owns one agent per role for its lifetime and exposes a
//! crew constructor per lifecycle stage. Stages are reachable in any
//! order: each constructor takes whatever context text the caller has,
//! with no requirement that it came from an earlier stage.

use std::fmt;

use devcrew_llm::LlmClient;

use crate::agent::Agent;
use crate::config::AgentDefaults;
use crate::crew::Crew;
use crate::roles::RoleId;
use crate::tasks::{
    deployment, development, project_management, requirements, system_design, testing,
};

/// Placeholder token standing in for the requirements stage's output in
/// the single-crew pipeline.
pub const REQUIREMENTS_OUTPUT_PLACEHOLDER: &str = "{requirements_output}";

/// Placeholder token standing in for the design stage's output in the
/// single-crew pipeline.
pub const DESIGN_OUTPUT_PLACEHOLDER: &str = "{design_output}";

/// One of the six lifecycle stages the workflow models.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Initiation,
    Requirements,
    Design,
    Development,
    Testing,
    Deployment,
}

impl Stage {
    /// All stages in lifecycle order.
    pub fn all() -> [Stage; 6] {
        [
            Stage::Initiation,
            Stage::Requirements,
            Stage::Design,
            Stage::Development,
            Stage::Testing,
            Stage::Deployment,
        ]
    }

    /// Map a 1-based menu selection to a stage.
    pub fn from_menu_choice(choice: &str) -> Option<Stage> {
        match choice.trim() {
            "1" => Some(Stage::Initiation),
            "2" => Some(Stage::Requirements),
            "3" => Some(Stage::Design),
            "4" => Some(Stage::Development),
            "5" => Some(Stage::Testing),
            "6" => Some(Stage::Deployment),
            _ => None,
        }
    }

    /// Stable identifier used in artifact file names.
    pub fn slug(&self) -> &'static str {
        match self {
            Stage::Initiation => "initiation",
            Stage::Requirements => "requirements",
            Stage::Design => "design",
            Stage::Development => "development",
            Stage::Testing => "testing",
            Stage::Deployment => "deployment",
        }
    }

    /// Human-readable stage name for menus and progress output.
    pub fn display_name(&self) -> &'static str {
        match self {
            Stage::Initiation => "Project Initiation",
            Stage::Requirements => "Requirements Analysis",
            Stage::Design => "System Design",
            Stage::Development => "Development Planning",
            Stage::Testing => "Test Planning",
            Stage::Deployment => "Deployment Planning",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// The virtual software team: six agents plus per-stage crew builders.
#[derive(Debug)]
pub struct DevWorkflow {
    project_manager: Agent,
    requirements_analyst: Agent,
    system_architect: Agent,
    developer: Agent,
    test_engineer: Agent,
    devops_engineer: Agent,
    verbose: bool,
}

impl DevWorkflow {
    /// Build the full agent set over one shared LLM handle.
    pub fn new(llm: LlmClient) -> Self {
        Self::with_defaults(llm, &AgentDefaults::default())
    }

    /// Build the agent set with configured defaults applied.
    ///
    /// `max_iter` and `memory` come from the defaults; delegation stays
    /// role-determined (the project manager delegates, nobody else does).
    pub fn with_defaults(llm: LlmClient, defaults: &AgentDefaults) -> Self {
        let build = |role| {
            Agent::new(role, llm.clone())
                .with_max_iter(defaults.max_iter)
                .with_memory(defaults.memory)
        };
        Self {
            project_manager: build(RoleId::ProjectManager),
            requirements_analyst: build(RoleId::RequirementsAnalyst),
            system_architect: build(RoleId::SystemArchitect),
            developer: build(RoleId::Developer),
            test_engineer: build(RoleId::TestEngineer),
            devops_engineer: build(RoleId::DevopsEngineer),
            verbose: defaults.verbose,
        }
    }

    /// The agent playing `role`.
    pub fn agent(&self, role: RoleId) -> &Agent {
        match role {
            RoleId::ProjectManager => &self.project_manager,
            RoleId::RequirementsAnalyst => &self.requirements_analyst,
            RoleId::SystemArchitect => &self.system_architect,
            RoleId::Developer => &self.developer,
            RoleId::TestEngineer => &self.test_engineer,
            RoleId::DevopsEngineer => &self.devops_engineer,
        }
    }

    /// Crew for the project initiation stage.
    pub fn initiation_crew(&self, project_description: &str, stakeholder_info: &str) -> Crew {
        let task = project_management::project_initiation(
            self.project_manager.clone(),
            project_description,
            stakeholder_info,
        );
        Crew::new(vec![self.project_manager.clone()], vec![task]).with_verbose(self.verbose)
    }

    /// Crew for the requirements analysis stage.
    pub fn requirements_crew(&self, project_description: &str) -> Crew {
        let task = requirements::requirements_analysis(
            self.requirements_analyst.clone(),
            project_description,
        );
        Crew::new(vec![self.requirements_analyst.clone()], vec![task]).with_verbose(self.verbose)
    }

    /// Crew for the system design stage.
    pub fn design_crew(&self, requirements_doc: &str) -> Crew {
        let task = system_design::system_design(self.system_architect.clone(), requirements_doc);
        Crew::new(vec![self.system_architect.clone()], vec![task]).with_verbose(self.verbose)
    }

    /// Crew for the development stage.
    ///
    /// Always plans the development work; additionally includes the
    /// implementation task when both `module_spec` and `task_description`
    /// are non-empty.
    pub fn development_crew(
        &self,
        technical_spec: &str,
        module_spec: &str,
        task_description: &str,
    ) -> Crew {
        let mut tasks = vec![development::development_planning(
            self.developer.clone(),
            technical_spec,
        )];

        if !module_spec.is_empty() && !task_description.is_empty() {
            tasks.push(development::code_implementation(
                self.developer.clone(),
                module_spec,
                task_description,
            ));
        }

        Crew::new(vec![self.developer.clone()], tasks).with_verbose(self.verbose)
    }

    /// Crew for the test planning stage.
    pub fn testing_crew(&self, requirements_doc: &str, architecture_doc: &str) -> Crew {
        let task = testing::test_planning(
            self.test_engineer.clone(),
            requirements_doc,
            architecture_doc,
        );
        Crew::new(vec![self.test_engineer.clone()], vec![task]).with_verbose(self.verbose)
    }

    /// Crew for the deployment planning stage.
    pub fn deployment_crew(&self, architecture_doc: &str, environment_requirements: &str) -> Crew {
        let task = deployment::deployment_planning(
            self.devops_engineer.clone(),
            architecture_doc,
            environment_requirements,
        );
        Crew::new(vec![self.devops_engineer.clone()], vec![task]).with_verbose(self.verbose)
    }

    /// One crew containing every stage's task, built up front.
    ///
    /// Known limitation: tasks past the requirements stage are
    /// constructed before any upstream output exists, so their
    /// descriptions carry the literal [`REQUIREMENTS_OUTPUT_PLACEHOLDER`]
    /// and [`DESIGN_OUTPUT_PLACEHOLDER`] tokens instead of real
    /// documents. Running this crew sends those tokens to the backend
    /// verbatim. To thread live results from stage to stage, run the
    /// stage crews one at a time and feed each result into the next
    /// constructor (the `full-workflow` binary does exactly that).
    pub fn full_pipeline_crew(&self, project_description: &str) -> Crew {
        let tasks = vec![
            project_management::project_initiation(
                self.project_manager.clone(),
                project_description,
                "",
            ),
            requirements::requirements_analysis(
                self.requirements_analyst.clone(),
                project_description,
            ),
            system_design::system_design(
                self.system_architect.clone(),
                REQUIREMENTS_OUTPUT_PLACEHOLDER,
            ),
            development::development_planning(self.developer.clone(), DESIGN_OUTPUT_PLACEHOLDER),
            testing::test_planning(
                self.test_engineer.clone(),
                REQUIREMENTS_OUTPUT_PLACEHOLDER,
                DESIGN_OUTPUT_PLACEHOLDER,
            ),
            deployment::deployment_planning(
                self.devops_engineer.clone(),
                DESIGN_OUTPUT_PLACEHOLDER,
                "",
            ),
        ];

        let agents = vec![
            self.project_manager.clone(),
            self.requirements_analyst.clone(),
            self.system_architect.clone(),
            self.developer.clone(),
            self.test_engineer.clone(),
            self.devops_engineer.clone(),
        ];

        Crew::new(agents, tasks).with_verbose(self.verbose)
    }
}
