//! Classboard backend entry point
//!
//! Boot order:
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌──────────┐    ┌──────────┐
//! │  Config  │───▶│ Logging  │───▶│ Postgres │───▶│ Gateway  │
//! │  (YAML)  │    │(tracing) │    │  (sqlx)  │    │  (axum)  │
//! └──────────┘    └──────────┘    └──────────┘    └──────────┘
//! ```

use std::sync::Arc;

use anyhow::Context;

use classboard::config::AppConfig;
use classboard::db::Database;
use classboard::{gateway, logging};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let config = AppConfig::load(&env);
    let _log_guard = logging::init_logging(&config);

    tracing::info!("Starting classboard backend in {} mode", env);

    let postgres_url = config
        .postgres_url
        .clone()
        .context("postgres_url must be set in the config file")?;
    let db = Database::connect(&postgres_url)
        .await
        .context("Failed to connect to PostgreSQL")?;

    let port = get_port_override().unwrap_or(config.gateway.port);

    gateway::run_server(&config, port, Arc::new(db)).await;

    Ok(())
}
