use anyhow::{Context, Result};
use dotenv::dotenv;
use shared::{config::ConnectionManager, utils::init_logger};
use stock::{config::Config, handler::AppRouter, state::AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let _log_guard = init_logger("stock-service", config.is_dev, config.enable_file_log);

    info!("🚀 Starting Stock Service initialization...");

    let db_pool = ConnectionManager::new_pool(
        &config.database_url,
        config.db_min_conn,
        config.db_max_conn,
    )
    .await
    .context("Failed to initialize database pool")?;

    let state = AppState::new(db_pool);

    info!("✅ Application setup completed successfully.");

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("✅ Stock Service shutdown complete.");

    Ok(())
}
