use actix_web::HttpServer;
use std::sync::Arc;
use tracing::{error, info};
use tracker_api::app::create_app;
use tracker_api::config::EnvConfig;
use tracker_api::db::postgres_service::PostgresService;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    info!("Starting application...");

    let config = EnvConfig::from_env().inspect_err(|e| error!("Invalid configuration: {}", e))?;
    let addr = format!("0.0.0.0:{}", config.port);

    // No database, no server.
    let postgres_service = Arc::new(
        PostgresService::new(&config.db_url)
            .await
            .inspect_err(|e| error!("Unable to connect to the database: {}", e))?,
    );

    info!("Server is running on {}", addr);

    let jwt = config.jwt.clone();
    HttpServer::new(move || create_app(Arc::clone(&postgres_service), jwt.clone()))
        .bind(addr)?
        .run()
        .await?;

    Ok(())
}
