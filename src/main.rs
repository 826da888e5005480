//! AvatarGen - photorealistic selfie prompt expander
//!
//! Expands a short description into a detailed image-generation prompt via
//! Gemini, keeping an in-memory history of past expansions for the session.

mod clipboard;
mod config;
mod expansion;
mod history;
mod llm;
mod runtime;
mod session;
mod system_instruction;
mod tui;

use config::{Config, DEFAULT_LOG_FILTER};
use expansion::ExpansionClient;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    // The terminal belongs to the UI, so logs go to a file
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false)
                .with_writer(Mutex::new(log_file)),
        )
        .init();

    tracing::info!(
        model = %config.model,
        thinking_budget = config.thinking_budget,
        credential = config.api_key.is_some(),
        "Starting avatargen"
    );

    let client = ExpansionClient::from_config(&config)?;
    let (handle, task) = runtime::spawn(client);

    let outcome = tui::run(&handle).await;

    drop(handle);
    // In-flight requests have no cancel; don't wait on them at exit
    task.abort();

    outcome?;
    Ok(())
}
