//! Requirements-stage tasks.

use crate::agent::Agent;
use crate::tasks::Task;

/// Analyze a project description into a requirements specification.
pub fn requirements_analysis(agent: Agent, project_description: &str) -> Task {
    Task::new(
        agent,
        format!(
            r#"Perform an in-depth requirements analysis based on the following project description:

Project description: {project_description}

Complete the following work:
1. Analyze the project's core business goals and user needs
2. Identify the major functional and non-functional requirements
3. Define user roles and usage scenarios
4. Analyze requirement priorities and dependencies
5. Identify potential risks and constraints
6. Write a detailed software requirements specification

Output requirements:
- The specification should cover functional requirements, non-functional requirements and user stories
- Use a clear structure and professional language
- Make sure every requirement is testable and implementable"#
        ),
        r#"A complete software requirements specification containing:
1. Project overview and goals
2. User role definitions
3. Functional requirements list with priorities
4. Non-functional requirements (performance, security, availability)
5. User stories and acceptance criteria
6. Constraints and assumptions
7. Risk assessment"#,
    )
}

/// Review and improve an existing requirements document.
pub fn requirements_review(agent: Agent, requirements_doc: &str) -> Task {
    Task::new(
        agent,
        format!(
            r#"Review and improve the following requirements document:

Requirements document: {requirements_doc}

Complete the following review work:
1. Check the requirements for completeness and consistency
2. Verify that the requirements are implementable and testable
3. Identify contradictions and gaps in the requirements
4. Assess whether the requirement priorities are reasonable
5. Propose improvements and an optimized version"#
        ),
        r#"A requirements review report containing:
1. Requirements quality assessment
2. Issues and risks found
3. Improvement suggestions
4. The optimized requirements document"#,
    )
}
