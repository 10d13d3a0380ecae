//! Interactive driver for the virtual software team.
//!
//! Presents a numbered menu on stdin: run the demo project, run one
//! stage interactively against a free-text project description, show
//! system info, or exit. A failed stage prints the error and returns to
//! the menu; only missing credentials at startup are fatal.

use std::io::{self, Write};

use anyhow::Result;
use devcrew::config::Config;
use devcrew::roles::{Role, RoleId};
use devcrew::workflow::{DevWorkflow, Stage};
use devcrew_llm::{Credentials, GOOGLE_API_KEY_VAR, OPENAI_API_KEY_VAR};

const DEMO_PROJECT: &str = "\
Build a personal blog platform with the following core features:
1. User registration and login
2. Publishing and editing articles
3. Article categories and tags
4. A comment system
5. Search
6. Responsive design

Technology stack:
- Frontend: React.js + TypeScript
- Backend: Node.js + Express
- Database: MongoDB
- Deployment: Docker + AWS";

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "devcrew=info,devcrew_llm=info".into()),
        )
        .init();

    let config = Config::default();

    if !config.credentials_present() {
        eprintln!("error: no LLM API key configured");
        eprintln!("Set one of the following and try again:");
        eprintln!("  export {GOOGLE_API_KEY_VAR}='your-google-api-key'");
        eprintln!("  export {OPENAI_API_KEY_VAR}='your-openai-api-key'");
        std::process::exit(1);
    }

    loop {
        print_menu();
        let choice = prompt("Select an option (1-4): ")?;

        match choice.as_str() {
            "1" => {
                if let Err(err) = run_demo(&config).await {
                    eprintln!("demo failed: {err:#}");
                }
            }
            "2" => {
                if let Err(err) = run_interactive(&config).await {
                    eprintln!("stage failed: {err:#}");
                }
            }
            "3" => show_system_info(&config),
            "4" => {
                println!("\nGoodbye!");
                break;
            }
            _ => println!("invalid selection, try again"),
        }

        prompt("\nPress Enter to continue...")?;
    }

    Ok(())
}

fn print_menu() {
    println!("\n{}", "=".repeat(60));
    println!("    devcrew - virtual software development team");
    println!("{}", "=".repeat(60));
    println!("1. Run the demo project");
    println!("2. Interactive mode");
    println!("3. Show system info");
    println!("4. Exit");
    println!("{}", "=".repeat(60));
}

/// Run the requirements stage against the built-in demo project.
async fn run_demo(config: &Config) -> Result<()> {
    println!("\nRunning the demo project\n{}", "=".repeat(60));

    let workflow = build_workflow(config)?;

    println!("\nExecuting requirements analysis...");
    let crew = workflow.requirements_crew(DEMO_PROJECT);
    let report = crew.run().await?;

    println!("\nRequirements analysis complete.");
    println!("{}", "=".repeat(60));
    println!("{report}");
    Ok(())
}

/// Free-text project description plus a stage selector.
async fn run_interactive(config: &Config) -> Result<()> {
    println!("\nInteractive mode\n{}", "-".repeat(40));

    let description = prompt("Describe your project: ")?;
    if description.is_empty() {
        println!("the project description cannot be empty");
        return Ok(());
    }

    println!("\nSelect the stage to run:");
    for (i, stage) in Stage::all().iter().enumerate() {
        println!("{}. {stage}", i + 1);
    }

    let choice = prompt("Select a stage (1-6): ")?;
    let Some(stage) = Stage::from_menu_choice(&choice) else {
        println!("invalid selection");
        return Ok(());
    };

    let workflow = build_workflow(config)?;
    let crew = match stage {
        Stage::Initiation => workflow.initiation_crew(&description, ""),
        Stage::Requirements => workflow.requirements_crew(&description),
        Stage::Design => workflow.design_crew(&description),
        Stage::Development => workflow.development_crew(&description, "", ""),
        Stage::Testing => workflow.testing_crew(&description, ""),
        Stage::Deployment => workflow.deployment_crew(&description, ""),
    };

    println!("\nExecuting {stage}...");
    let report = crew.run().await?;

    println!("\nDone.");
    println!("{}", "=".repeat(60));
    println!("{report}");
    Ok(())
}

fn show_system_info(config: &Config) {
    println!("\nSystem info");
    println!("{}", "-".repeat(40));
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    if let Ok(dir) = std::env::current_dir() {
        println!("Working directory: {}", dir.display());
    }

    let credentials = Credentials::from_env();
    println!(
        "Google API key: {}",
        if credentials.google_api_key.is_some() { "configured" } else { "not set" }
    );
    println!(
        "OpenAI API key: {}",
        if credentials.openai_api_key.is_some() { "configured" } else { "not set" }
    );
    println!("Temperature: {}", config.generation.temperature);
    println!("Max tokens: {}", config.generation.max_tokens);

    println!("\nTeam roster:");
    for id in RoleId::all() {
        let role = Role::get(id);
        println!("  - {}: {}", role.name, role.summary());
        println!("    skills: {}", role.skills.join(", "));
    }
}

fn build_workflow(config: &Config) -> Result<DevWorkflow> {
    let client = config.client()?;
    tracing::info!(provider = client.provider_name(), "LLM provider resolved");
    Ok(DevWorkflow::with_defaults(client, &config.agent))
}

fn prompt(message: &str) -> io::Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
