use anyhow::{Context, Result};
use backoffice::{config::Config, handler::AppRouter, state::AppState};
use dotenv::dotenv;
use shared::utils::init_logger;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let is_dev = std::env::var("DEV_MODE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);
    let is_enable_file = std::env::var("ENABLE_FILE_LOG")
        .map(|v| v == "true")
        .unwrap_or(false);

    init_logger("backoffice", is_dev, is_enable_file);

    let config = Config::init().context("Failed to load configuration")?;

    let port = config.port;

    let state = AppState::new(&config)
        .await
        .context("Failed to create AppState")?;

    info!("Back-office state ready: {:?}", state);

    AppRouter::serve(port, state)
        .await
        .context("Failed to start server")?;

    info!("Shutting down back-office");

    Ok(())
}
