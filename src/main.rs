mod app;
mod client;
mod config;
mod error;
mod gemini;
mod input;

use anyhow::Result;
use dotenv::dotenv;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::client::GeminiClient;
use crate::config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    // Logging goes to stderr so stdout carries only the prompt and result
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
    dotenv().ok();

    let config = Config::from_env();
    tracing::debug!(endpoint = %config.endpoint(), has_key = config.api_key.is_some(), "configured");
    let client = GeminiClient::new(&config);

    let code = app::run(&client, io::stdin().lock(), &mut io::stdout(), &mut io::stderr()).await?;
    Ok(ExitCode::from(code))
}
