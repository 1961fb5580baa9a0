//! # CMS API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod observability;
mod state;
mod telemetry;

use config::AppConfig;
use observability::RequestIdMiddleware;
use state::AppState;
use telemetry::{TelemetryConfig, init_telemetry};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting CMS API Server on {}:{}",
        config.host,
        config.port
    );

    run(config).await
}

#[cfg(feature = "postgres")]
async fn run(config: AppConfig) -> anyhow::Result<()> {
    use anyhow::Context;
    use cms_infra::DatabasePool;

    let Some(database) = config.database.as_ref() else {
        tracing::warn!("DATABASE_URL not set, using in-memory storage");
        return serve(&config, AppState::in_memory()).await;
    };

    let pool = DatabasePool::init(database)
        .await
        .context("Failed to connect to database")?;

    let result = serve(&config, AppState::postgres(&pool)).await;

    if let Err(e) = pool.close().await {
        tracing::warn!("Failed to close database pool: {}", e);
    }

    result
}

#[cfg(not(feature = "postgres"))]
async fn run(config: AppConfig) -> anyhow::Result<()> {
    if config.database.is_some() {
        tracing::warn!("DATABASE_URL is set but the postgres feature is disabled, ignoring it");
    }

    serve(&config, AppState::in_memory()).await
}

async fn serve(config: &AppConfig, state: AppState) -> anyhow::Result<()> {
    HttpServer::new(move || {
        App::new()
            .wrap(RequestIdMiddleware)
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(handlers::json_config())
            .app_data(handlers::query_config())
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
