//! services/app/src/bin/cognistack.rs

use app_lib::{
    config::Config,
    error::AppError,
    ui::{run_session, state::AppState},
};
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Config::from_env()?;
    // Logs go to stderr so they never interleave with the rendered pages.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    info!(scorer = ?config.scorer, "Configuration loaded. Starting console...");

    // --- 2. Initialize Adapters & Build the Shared AppState ---
    let app_state = AppState::from_config(config).await?;

    // --- 3. Run the Session over the Terminal ---
    let stdin = BufReader::new(tokio::io::stdin());
    run_session(&app_state, stdin, tokio::io::stdout()).await?;

    Ok(())
}
