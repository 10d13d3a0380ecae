//! Provider smoke check: resolve a backend from the environment and send
//! one probe prompt.

use anyhow::{Context, Result};
use clap::Parser;
use devcrew_llm::{Credentials, LlmClient};

#[derive(Parser, Debug)]
#[command(name = "llm-check", version, about)]
struct Args {
    /// Prompt to send
    #[arg(short, long, default_value = "Introduce yourself in one sentence.")]
    prompt: String,

    /// Fall back to the mock provider when no credentials are configured
    #[arg(long)]
    allow_mock: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "devcrew_llm=debug".into()),
        )
        .init();

    let args = Args::parse();

    let credentials = Credentials::from_env();
    let client = if args.allow_mock {
        LlmClient::from_env_or_mock()
    } else {
        LlmClient::from_env().context(
            "no provider available; set GOOGLE_API_KEY or OPENAI_API_KEY, or pass --allow-mock",
        )?
    };

    println!("google key: {}", credentials.google_api_key.is_some());
    println!("openai key: {}", credentials.openai_api_key.is_some());
    println!("resolved provider: {}", client.provider_name());

    let reply = client.invoke(&args.prompt).await?;
    println!("\n{reply}");

    Ok(())
}
