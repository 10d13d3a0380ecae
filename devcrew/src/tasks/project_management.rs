//! Project-management tasks.
//!
//! The project manager's tasks span the whole lifecycle: initiation,
//! planning, monitoring, risk, quality, communication and closure.

use crate::agent::Agent;
use crate::tasks::Task;

/// Kick the project off and draft the project charter.
pub fn project_initiation(agent: Agent, project_description: &str, stakeholder_info: &str) -> Task {
    Task::new(
        agent,
        format!(
            r#"Start the software development project and draft the project charter:

Project description: {project_description}
Stakeholder information: {stakeholder_info}

Complete the following initiation work:
1. Analyze the project background and business value
2. Identify the stakeholders and their roles
3. Define the project scope and boundaries
4. Set the project goals and success criteria
5. Assess project risks and constraints
6. Draft the project charter
7. Assemble the project team

Output requirements:
- Make the goals and scope explicit
- Identify the key risks and their mitigations
- Establish the project governance structure"#
        ),
        r#"A project charter containing:
1. Project overview and background
2. Goals and success criteria
3. Scope statement
4. Stakeholder analysis
5. Risk assessment
6. Project organization
7. Milestones"#,
    )
}

/// Turn the charter into a detailed execution plan.
pub fn project_planning(agent: Agent, project_charter: &str, team_capacity: &str) -> Task {
    Task::new(
        agent,
        format!(
            r#"Produce a detailed project execution plan:

Project charter: {project_charter}
Team capacity: {team_capacity}

Complete the following planning work:
1. Build the work breakdown structure
2. Estimate effort and duration per work item
3. Lay out the project schedule
4. Assign resources and responsibilities
5. Define the quality management plan
6. Define the communication plan
7. Define the risk management plan

Planning requirements:
- Respect team capacity and resource constraints
- Build in sensible buffer time
- Set clear milestones"#
        ),
        r#"A project management plan containing:
1. Work breakdown structure
2. Project schedule
3. Resource allocation plan
4. Quality management plan
5. Communication plan
6. Risk management plan
7. Change management process"#,
    )
}

/// Monitor execution progress and report status.
pub fn progress_monitoring(agent: Agent, project_plan: &str, current_status: &str) -> Task {
    Task::new(
        agent,
        format!(
            r#"Monitor project execution and analyze its status:

Project plan: {project_plan}
Current status: {current_status}

Complete the following monitoring work:
1. Collect execution data
2. Analyze schedule deviations and their causes
3. Assess quality metrics and risk status
4. Identify problems and blockers
5. Define corrective actions
6. Update the project forecast
7. Prepare the status report

Monitoring requirements:
- Report accurate progress data
- Identify critical-path risks
- Propose actionable improvements"#
        ),
        r#"A project status report containing:
1. Schedule performance
2. Quality metric analysis
3. Risk status update
4. Problem and blocker list
5. Corrective action plan
6. Updated forecast
7. Focus areas for the next period"#,
    )
}

/// Manage the risk register and response strategies.
pub fn risk_management(agent: Agent, risk_register: &str, project_context: &str) -> Task {
    Task::new(
        agent,
        format!(
            r#"Manage project risks and define response strategies:

Risk register: {risk_register}
Project context: {project_context}

Complete the following risk work:
1. Identify new project risks
2. Assess risk probability and impact
3. Update risk priorities
4. Define response strategies
5. Monitor risk trigger conditions
6. Execute mitigation measures
7. Update the risk register

Risk management requirements:
- Use quantitative and qualitative analysis
- Define proactive and reactive strategies
- Establish early-warning mechanisms"#
        ),
        r#"A risk management report containing:
1. Risk identification and assessment
2. Risk priority matrix
3. Response strategies
4. Risk monitoring plan
5. Contingency plans
6. Updated risk register
7. Risk management recommendations"#,
    )
}

/// Run quality assurance over the project deliverables.
pub fn quality_assurance(agent: Agent, quality_plan: &str, deliverables: &str) -> Task {
    Task::new(
        agent,
        format!(
            r#"Run quality assurance and safeguard delivery quality:

Quality plan: {quality_plan}
Project deliverables: {deliverables}

Complete the following quality work:
1. Run quality reviews and inspections
2. Monitor quality metrics and trends
3. Identify quality problems and root causes
4. Define quality improvements
5. Verify deliverable quality
6. Run quality training
7. Update the quality process

Quality requirements:
- Meet the quality standards
- Drive continuous improvement
- Build a quality culture"#
        ),
        r#"A quality assurance report containing:
1. Quality review results
2. Quality metric analysis
3. Problem identification and analysis
4. Improvement action plan
5. Deliverable quality confirmation
6. Quality process optimization
7. Quality management recommendations"#,
    )
}

/// Manage stakeholder communication around project updates.
pub fn stakeholder_communication(agent: Agent, communication_plan: &str, project_updates: &str) -> Task {
    Task::new(
        agent,
        format!(
            r#"Manage stakeholder communication and the project relationships:

Communication plan: {communication_plan}
Project updates: {project_updates}

Complete the following communication work:
1. Analyze stakeholder needs and expectations
2. Prepare the communication materials
3. Organize project meetings and reporting
4. Handle stakeholder feedback and concerns
5. Manage change requests
6. Maintain project documentation and the knowledge base
7. Foster team collaboration

Communication requirements:
- Keep information timely and accurate
- Use the right channel for each audience
- Build healthy project relationships"#
        ),
        r#"A communication management report containing:
1. Stakeholder satisfaction analysis
2. Communication effectiveness review
3. Feedback handling status
4. Change request status
5. Team collaboration assessment
6. Communication improvement suggestions
7. Next-period communication plan"#,
    )
}

/// Close the project out and capture the lessons learned.
pub fn project_closure(agent: Agent, project_deliverables: &str, lessons_learned: &str) -> Task {
    Task::new(
        agent,
        format!(
            r#"Run the project closure activities and summarize the experience:

Project deliverables: {project_deliverables}
Lessons learned: {lessons_learned}

Complete the following closure work:
1. Verify the deliverables are complete
2. Obtain customer acceptance
3. Release project resources
4. Archive the project documentation
5. Summarize lessons learned
6. Assess project success
7. Plan follow-up support

Closure requirements:
- Confirm every deliverable meets its requirements
- Complete the knowledge transfer
- Capture the best practices"#
        ),
        r#"A project closure report containing:
1. Delivery confirmation
2. Customer acceptance report
3. Project success assessment
4. Lessons-learned summary
5. Extracted best practices
6. Documentation archive
7. Follow-up support plan"#,
    )
}
