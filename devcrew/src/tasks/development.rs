//! Development-stage tasks.

use crate::agent::Agent;
use crate::tasks::Task;

/// Break a technical specification down into a development plan.
pub fn development_planning(agent: Agent, technical_spec: &str) -> Task {
    Task::new(
        agent,
        format!(
            r#"Produce a detailed development plan based on the technical specification:

Technical specification: {technical_spec}

Complete the following planning work:
1. Analyze the specification and identify the development tasks
2. Decompose the functional modules into concrete work items
3. Estimate effort and complexity for each work item
4. Determine dependencies between work items
5. Lay out the development timeline and milestones
6. Identify technical risks and how to address them
7. Define the code structure and organization

Output requirements:
- Provide a detailed task breakdown with time estimates
- Account for code reuse and modular design
- Set sensible development priorities"#
        ),
        r#"A development plan containing:
1. Work breakdown structure
2. Development timeline and milestones
3. Task dependency graph
4. Technical risk assessment
5. Code structure design
6. Development environment and tooling setup
7. Quality assurance plan"#,
    )
}

/// Implement one module against its specification.
pub fn code_implementation(agent: Agent, module_spec: &str, task_description: &str) -> Task {
    Task::new(
        agent,
        format!(
            r#"Implement the functionality of the specified module:

Module specification: {module_spec}
Task description: {task_description}

Complete the following development work:
1. Design the module's types and interfaces from the specification
2. Implement the core business logic
3. Add appropriate error handling and logging
4. Write unit tests
5. Add the necessary documentation and comments
6. Self-test and optimize the code

Code requirements:
- Follow the coding standards and best practice
- Keep the code readable and maintainable
- Handle errors appropriately
- Include complete unit tests"#
        ),
        r#"A complete implementation containing:
1. The functional code files
2. Unit test code
3. Code documentation and comments
4. Configuration files where needed
5. Dependency notes
6. Usage examples"#,
    )
}

/// Review a set of code files for quality and safety.
pub fn code_review(agent: Agent, code_files: &str) -> Task {
    Task::new(
        agent,
        format!(
            r#"Perform a thorough review of the following code:

Code files: {code_files}

Complete the following review work:
1. Check code quality and adherence to the coding standards
2. Assess readability and maintainability
3. Identify potential bugs and security issues
4. Check error handling and boundary conditions
5. Evaluate performance and optimization opportunities
6. Verify unit test coverage and quality
7. Propose improvements

Review bar:
- Code conforms to the project's coding standards
- Logic is clear and well structured
- Appropriate error handling and logging
- Sufficient test coverage"#
        ),
        r#"A code review report containing:
1. Code quality assessment
2. Issues found and suggestions
3. Security analysis
4. Performance optimization suggestions
5. Test coverage analysis
6. Improved code where needed"#,
    )
}

/// Integrate developed modules and resolve cross-module issues.
pub fn module_integration(agent: Agent, modules_info: &str) -> Task {
    Task::new(
        agent,
        format!(
            r#"Integrate the developed modules and get them working together:

Module information: {modules_info}

Complete the following integration work:
1. Analyze the interfaces and dependencies between modules
2. Write the integration code and configuration
3. Resolve compatibility issues between modules
4. Run integration tests
5. Optimize system performance
6. Write the integration documentation

Integration requirements:
- Keep module interfaces consistent
- Handle data format conversions
- Propagate errors appropriately across module boundaries"#
        ),
        r#"An integration result containing:
1. Integration code and configuration
2. Integration test report
3. Performance test results
4. Problem resolutions
5. Integration documentation
6. Deployment notes"#,
    )
}
