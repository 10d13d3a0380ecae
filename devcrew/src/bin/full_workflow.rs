//! Staged end-to-end run: initiation through deployment, threading each
//! stage's real output into the next stage's crew.
//!
//! This is the correct-threading counterpart to
//! `DevWorkflow::full_pipeline_crew`: instead of building every task up
//! front with placeholder context, each crew is constructed only after
//! the text it depends on exists.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use uuid::Uuid;

use devcrew::artifacts::{save_run_summary, save_stage_output, RunSummary, StageRecord};
use devcrew::config::Config;
use devcrew::crew::Crew;
use devcrew::workflow::{DevWorkflow, Stage};

const DEFAULT_PROJECT: &str = "\
Build an online library management system with the following core features:
1. User registration and login
2. Book catalog management (create, read, update, delete)
3. Borrowing and returning books
4. Borrowing history per user
5. Book recommendations
6. An administration backend

Technical requirements:
- Frontend in React.js
- Backend in Python Flask
- PostgreSQL database
- RESTful API
- Authentication and authorization
- Responsive design with mobile support";

/// Run all six lifecycle stages in order, saving each stage's output.
#[derive(Parser, Debug)]
#[command(name = "full-workflow", version, about)]
struct Args {
    /// Project description: inline text or a path to a file containing it
    #[arg(short, long)]
    project: Option<String>,

    /// Stakeholder information for the initiation stage
    #[arg(long, default_value = "product manager, development team, QA team, operations team")]
    stakeholders: String,

    /// Directory for stage artifacts and the run summary
    #[arg(short, long, default_value = "output")]
    output_dir: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "devcrew=info,devcrew_llm=info".into()),
        )
        .init();

    let args = Args::parse();
    let config = Config::default();

    let project_description = match &args.project {
        Some(value) => load_text_or_literal(value).await?,
        None => DEFAULT_PROJECT.to_string(),
    };

    let client = config.client().context("no usable LLM provider")?;
    println!("Using provider: {}", client.provider_name());

    let workflow = DevWorkflow::with_defaults(client, &config.agent);
    let output_dir = Path::new(&args.output_dir);

    let mut summary = RunSummary {
        run_id: Uuid::new_v4(),
        started_at: Local::now(),
        project_description: project_description.clone(),
        stages: Vec::new(),
    };

    // Stage 1: initiation
    let charter = run_stage(
        Stage::Initiation,
        workflow.initiation_crew(&project_description, &args.stakeholders),
        output_dir,
        &mut summary,
    )
    .await?;

    // Stage 2: requirements
    let requirements = run_stage(
        Stage::Requirements,
        workflow.requirements_crew(&project_description),
        output_dir,
        &mut summary,
    )
    .await?;

    // Stage 3: design, from the real requirements text
    let design = run_stage(
        Stage::Design,
        workflow.design_crew(&requirements),
        output_dir,
        &mut summary,
    )
    .await?;

    // Stage 4: development planning, from the real design text
    let _development = run_stage(
        Stage::Development,
        workflow.development_crew(&design, "", ""),
        output_dir,
        &mut summary,
    )
    .await?;

    // Stage 5: test planning, from requirements + design
    let _testing = run_stage(
        Stage::Testing,
        workflow.testing_crew(&requirements, &design),
        output_dir,
        &mut summary,
    )
    .await?;

    // Stage 6: deployment planning, from the design
    let _deployment = run_stage(
        Stage::Deployment,
        workflow.deployment_crew(&design, ""),
        output_dir,
        &mut summary,
    )
    .await?;

    let summary_path = save_run_summary(output_dir, &summary).await?;
    println!("\nAll six stages complete.");
    println!("Charter starts with: {}", first_line(&charter));
    println!("Run summary: {}", summary_path.display());

    Ok(())
}

async fn run_stage(
    stage: Stage,
    crew: Crew,
    output_dir: &Path,
    summary: &mut RunSummary,
) -> Result<String> {
    println!("\n--- {stage} ---");

    let report = crew
        .run()
        .await
        .with_context(|| format!("{stage} stage failed"))?;
    let output = report.final_output().to_string();

    let path = save_stage_output(output_dir, stage, &output).await?;
    summary.stages.push(StageRecord {
        stage: stage.slug().to_string(),
        output_file: path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
    });

    println!("saved {}", path.display());
    Ok(output)
}

/// Treat the argument as a file path when one exists, else as the text itself.
async fn load_text_or_literal(value: &str) -> Result<String> {
    let path = Path::new(value);
    if path.is_file() {
        tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read project description from {value}"))
    } else {
        Ok(value.to_string())
    }
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or_default()
}
