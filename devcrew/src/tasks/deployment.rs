//! Deployment-stage tasks.

use crate::agent::Agent;
use crate::tasks::Task;

/// Plan the deployment from the architecture and environment requirements.
pub fn deployment_planning(
    agent: Agent,
    architecture_doc: &str,
    environment_requirements: &str,
) -> Task {
    Task::new(
        agent,
        format!(
            r#"Produce a deployment plan from the system architecture and environment requirements:

System architecture: {architecture_doc}
Environment requirements: {environment_requirements}

Complete the following deployment planning work:
1. Analyze the architecture and deployment needs
2. Design the deployment architecture and environment topology
3. Choose the deployment platform and tooling
4. Define the containerization and orchestration strategy
5. Design the CI/CD pipeline
6. Plan monitoring and logging
7. Define the security and backup strategy

Output requirements:
- Provide a detailed deployment architecture diagram
- Account for high availability and scalability
- Size the resources sensibly"#
        ),
        r#"A deployment plan containing:
1. Deployment architecture design
2. Environment configuration conventions
3. Containerization approach
4. CI/CD pipeline design
5. Monitoring and logging approach
6. Security configuration
7. Operations handbook"#,
    )
}

/// Build the CI/CD pipeline described by a deployment plan.
pub fn cicd_setup(agent: Agent, deployment_plan: &str, code_repository: &str) -> Task {
    Task::new(
        agent,
        format!(
            r#"Build the CI/CD pipeline from the deployment plan:

Deployment plan: {deployment_plan}
Code repository: {code_repository}

Complete the following CI/CD work:
1. Configure the repository and branching strategy
2. Set up the automated build
3. Integrate automated testing
4. Set up code quality checks
5. Configure automated deployment
6. Set up environment management and configuration
7. Configure notifications and reporting

CI/CD requirements:
- Support multiple deployment environments
- Integrate automated tests into the pipeline
- Provide a rollback mechanism"#
        ),
        r#"CI/CD configuration and documentation containing:
1. Pipeline configuration files
2. Build scripts
3. Deployment scripts
4. Environment configuration files
5. Quality gate configuration
6. Monitoring and notification configuration
7. Operating manual"#,
    )
}

/// Provision the infrastructure for a deployment architecture.
pub fn infrastructure_setup(agent: Agent, deployment_architecture: &str) -> Task {
    Task::new(
        agent,
        format!(
            r#"Provision the infrastructure for the deployment architecture:

Deployment architecture: {deployment_architecture}

Complete the following infrastructure work:
1. Configure the cloud platform resources
2. Set up networking and security groups
3. Configure the load balancer
4. Set up databases and storage
5. Configure the container orchestration platform
6. Set up monitoring and logging
7. Configure backup and disaster recovery

Infrastructure requirements:
- Use infrastructure as code
- Guarantee high availability
- Support automatic scaling"#
        ),
        r#"Infrastructure configuration containing:
1. Infrastructure-as-code files (Terraform/CloudFormation)
2. Orchestration configuration (Kubernetes/Docker Compose)
3. Network and security configuration
4. Monitoring configuration files
5. Backup strategy configuration
6. Operations scripts
7. Deployment documentation"#,
    )
}

/// Set up system-wide monitoring and alerting.
pub fn monitoring_setup(
    agent: Agent,
    system_architecture: &str,
    performance_requirements: &str,
) -> Task {
    Task::new(
        agent,
        format!(
            r#"Build a comprehensive monitoring and alerting system:

System architecture: {system_architecture}
Performance requirements: {performance_requirements}

Complete the following monitoring work:
1. Design the monitoring architecture and metric system
2. Configure application performance monitoring
3. Set up infrastructure monitoring
4. Configure log collection and analysis
5. Set alert rules and notifications
6. Create monitoring dashboards
7. Define the incident response process

Monitoring requirements:
- Cover both application and infrastructure
- Alert in real time
- Support troubleshooting"#
        ),
        r#"Monitoring configuration containing:
1. Monitoring architecture design
2. Monitoring tool configuration
3. Alert rule configuration
4. Dashboard configuration
5. Logging configuration
6. Incident response handbook
7. Operations guide"#,
    )
}

/// Harden the deployment environment against the security requirements.
pub fn security_hardening(agent: Agent, security_requirements: &str, deployment_config: &str) -> Task {
    Task::new(
        agent,
        format!(
            r#"Harden the deployment environment:

Security requirements: {security_requirements}
Deployment configuration: {deployment_config}

Complete the following hardening work:
1. Configure network security policies
2. Set up authentication and authorization
3. Configure data encryption
4. Set up security scanning and detection
5. Configure access control and auditing
6. Set up secure backup and recovery
7. Define the security incident response plan

Security requirements:
- Follow security best practice
- Apply defense in depth
- Support compliance audits"#
        ),
        r#"Security configuration documentation containing:
1. Security policy configuration
2. Authentication and authorization configuration
3. Encryption configuration
4. Security scanning configuration
5. Audit log configuration
6. Incident response plan
7. Security operations handbook"#,
    )
}

/// Execute the production deployment itself.
pub fn production_deployment(agent: Agent, deployment_package: &str, environment_config: &str) -> Task {
    Task::new(
        agent,
        format!(
            r#"Execute the production deployment:

Deployment package: {deployment_package}
Environment configuration: {environment_config}

Complete the following production work:
1. Verify the deployment preconditions
2. Run the database migrations
3. Deploy the application services
4. Configure load balancing
5. Run post-deployment verification
6. Configure monitoring and alerting
7. Prepare the rollback plan

Deployment requirements:
- Deploy with zero downtime
- Verify that everything works
- Have the contingency plan ready"#
        ),
        r#"A deployment execution report containing:
1. Deployment execution log
2. Verification test results
3. Performance baseline
4. Monitoring configuration confirmation
5. Rollback plan
6. Operations handover documentation
7. Go-live checklist"#,
    )
}
