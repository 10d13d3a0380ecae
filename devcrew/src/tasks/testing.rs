//! Testing-stage tasks.

use crate::agent::Agent;
use crate::tasks::Task;

/// Produce a test plan from the requirements and architecture documents.
pub fn test_planning(agent: Agent, requirements_doc: &str, architecture_doc: &str) -> Task {
    Task::new(
        agent,
        format!(
            r#"Produce a comprehensive test plan from the requirements and architecture documents:

Requirements document: {requirements_doc}
Architecture document: {architecture_doc}

Complete the following test planning work:
1. Analyze the requirements and architecture to identify the test scope
2. Define the test strategy and methods
3. Design the test case structure and test data
4. Plan each kind of testing (unit, integration, system, acceptance)
5. Determine the test environment and tooling needs
6. Lay out the test timeline and milestones
7. Identify testing risks and mitigations

Output requirements:
- Cover all functional and non-functional requirements
- Account for abnormal scenarios and boundary conditions
- Set sensible test priorities"#
        ),
        r#"A test plan containing:
1. Test strategy and methods
2. Test scope and boundaries
3. Test case design conventions
4. Test environment configuration
5. Test tool and framework selection
6. Test timeline
7. Risk assessment and mitigation plan"#,
    )
}

/// Design detailed test cases from a test plan and module specification.
pub fn test_case_design(agent: Agent, test_plan: &str, module_spec: &str) -> Task {
    Task::new(
        agent,
        format!(
            r#"Design detailed test cases from the test plan and module specification:

Test plan: {test_plan}
Module specification: {module_spec}

Complete the following test design work:
1. Design functional test cases
2. Design boundary-value and abnormal-path test cases
3. Design performance test cases
4. Design security test cases
5. Design compatibility test cases
6. Prepare test data and the test environment
7. Write automated test scripts

Test case requirements:
- Include clear preconditions and expected results
- Cover both normal and abnormal flows
- Be executable and repeatable"#
        ),
        r#"A test case document containing:
1. Functional test case suite
2. Performance test cases
3. Security test cases
4. Automated test scripts
5. Test data preparation
6. Test environment configuration notes
7. Execution guide"#,
    )
}

/// Execute test cases against a code version and report results.
pub fn test_execution(agent: Agent, test_cases: &str, code_version: &str) -> Task {
    Task::new(
        agent,
        format!(
            r#"Execute the test cases and record the results:

Test cases: {test_cases}
Code version: {code_version}

Complete the following test execution work:
1. Set up and configure the test environment
2. Execute the functional test cases
3. Execute performance and stress tests
4. Execute security tests
5. Record results and defects
6. Analyze test coverage
7. Produce the test report

Execution requirements:
- Follow the test case steps exactly
- Record the process and results in detail
- Report discovered defects promptly"#
        ),
        r#"A test execution report containing:
1. Execution summary
2. Result statistics
3. Defect reports and analysis
4. Coverage report
5. Performance test results
6. Risk assessment
7. Improvement suggestions"#,
    )
}

/// Run regression tests over a set of changes.
pub fn regression_testing(agent: Agent, previous_results: &str, new_changes: &str) -> Task {
    Task::new(
        agent,
        format!(
            r#"Run regression tests over the system changes:

Previous test results: {previous_results}
New changes: {new_changes}

Complete the following regression work:
1. Analyze the impact scope of the changes
2. Select the relevant regression test cases
3. Execute the regression tests
4. Compare results against the previous run
5. Verify that fixed defects stay fixed
6. Assess system stability

Regression requirements:
- Focus on functionality related to the changes
- Verify that core functionality is unaffected
- Make sure fixed defects do not reappear"#
        ),
        r#"A regression test report containing:
1. Change impact analysis
2. Regression test results
3. Defect fix verification
4. System stability assessment
5. Risk assessment
6. Release recommendation"#,
    )
}

/// Performance-test the system against its performance requirements.
pub fn performance_testing(
    agent: Agent,
    performance_requirements: &str,
    system_architecture: &str,
) -> Task {
    Task::new(
        agent,
        format!(
            r#"Run performance tests and optimization analysis on the system:

Performance requirements: {performance_requirements}
System architecture: {system_architecture}

Complete the following performance work:
1. Design the performance test scenarios
2. Configure the performance test environment
3. Execute load and stress tests
4. Monitor system resource usage
5. Analyze performance bottlenecks
6. Propose performance optimizations
7. Verify the effect of the optimizations

Performance test requirements:
- Simulate realistic user scenarios
- Probe the system's limits
- Pinpoint the bottlenecks"#
        ),
        r#"A performance test report containing:
1. Performance test results
2. System resource analysis
3. Bottleneck identification
4. Optimization suggestions
5. Capacity planning recommendations
6. Monitoring metric definitions"#,
    )
}
