use anyhow::Result;
use gym_api::api::routes::create_routes;
use gym_api::config::{AppConfig, DatabaseConfig, PgConnectionProvider};
use gym_api::services::GymService;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let app_config = AppConfig::from_env()?;
    let db_config = DatabaseConfig::from_env()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&app_config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(app_config.is_development())
        .init();

    info!(
        host = %db_config.host,
        port = db_config.port,
        database = %db_config.database,
        "Using gym database"
    );

    let provider = Arc::new(PgConnectionProvider::new(&db_config));
    let app = create_routes(Arc::new(GymService::new(provider)));

    let address = app_config.server_address();
    let listener = TcpListener::bind(&address).await?;
    info!("Gym server starting on http://{}", address);
    info!("Health check available at http://{}/health", address);

    axum::serve(listener, app).await?;

    Ok(())
}
