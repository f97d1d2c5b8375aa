use anyhow::{Context, Result};
use crm::{handler::AppRouter, state::AppState};
use dotenv::dotenv;
use chrono::Local;
use shared::{
    config::{Config, ConnectionManager},
    service::seed::DemoSeeder,
    utils::Logger,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let _logger = Logger::new("crm-service", config.dev_mode);

    let db_pool = ConnectionManager::new_pool(&config.database_url, config.run_migrations)
        .await
        .context("Failed to initialize database pool")?;

    let state = AppState::new(db_pool);

    if config.seed_demo_data {
        let deps = &state.di_container;
        let seeded = DemoSeeder::new(
            deps.seller.query.clone(),
            deps.seller.command.clone(),
            deps.transaction.command.clone(),
        )
        .run(Local::now().naive_local())
        .await
        .context("Failed to seed demo data")?;

        info!("🌱 Demo data ready, {seeded} sales written");
    }

    info!("🚀 CRM service starting on port {}", config.port);

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("✅ CRM service shutdown complete.");

    Ok(())
}
