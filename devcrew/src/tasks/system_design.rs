//! Design-stage tasks.

use crate::agent::Agent;
use crate::tasks::Task;

/// Design the system architecture from a requirements document.
pub fn system_design(agent: Agent, requirements_doc: &str) -> Task {
    Task::new(
        agent,
        format!(
            r#"Design a system architecture based on the following requirements document:

Requirements document: {requirements_doc}

Complete the following architecture work:
1. Analyze the requirements and determine the system boundary
2. Design the overall architecture and module decomposition
3. Choose an appropriate technology stack and frameworks
4. Design the database structure and data flows
5. Define the API surface and service contracts
6. Account for scalability and performance requirements
7. Design the security architecture and deployment approach

Output requirements:
- Provide clear architecture diagrams and design documentation
- Explain the reasoning behind the technology choices
- Address the system's non-functional requirements"#
        ),
        r#"A complete system architecture design document containing:
1. Architecture overview and design principles
2. Architecture diagrams (overall, module and deployment views)
3. Technology stack selection with rationale
4. Database design (ER diagram, table structures)
5. API design conventions
6. Security architecture design
7. Performance and scalability considerations
8. Deployment and operations approach"#,
    )
}

/// Review an architecture design for feasibility and risk.
pub fn architecture_review(agent: Agent, architecture_doc: &str) -> Task {
    Task::new(
        agent,
        format!(
            r#"Review the following system architecture design:

Architecture document: {architecture_doc}

Complete the following review work:
1. Assess whether the architecture is sound and feasible
2. Check that the technology choices fit the project's needs
3. Analyze scalability and maintainability
4. Identify potential performance bottlenecks and risk points
5. Evaluate the security and reliability design
6. Propose optimizations"#
        ),
        r#"An architecture review report containing:
1. Architecture quality assessment
2. Technology selection analysis
3. Identified risks and mitigations
4. Performance and scalability evaluation
5. Improvement suggestions and best practices"#,
    )
}

/// Turn an architecture design into a detailed technical specification.
pub fn technical_specification(agent: Agent, architecture_doc: &str) -> Task {
    Task::new(
        agent,
        format!(
            r#"Write a detailed technical specification based on the architecture design:

Architecture document: {architecture_doc}

Complete the following work:
1. Define each module's interfaces and responsibilities in detail
2. Write the API documentation and data format conventions
3. Define coding standards and development conventions
4. Set the database design standards
5. Define the test strategy and quality bar"#
        ),
        r#"A technical specification containing:
1. Module design conventions
2. API interface documentation
3. Database design documentation
4. Coding standards
5. Test conventions
6. Deployment and configuration notes"#,
    )
}
