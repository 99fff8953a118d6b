// src/main.rs

use inventory_api::config::AppConfig;
use inventory_api::repositories::{PgProductRepository, ProductRepository};
use inventory_api::services::ProductService;
use inventory_api::state::AppState;
use inventory_api::web::routes::configure_app_routes;
use inventory_api::{db, web};

use actix_cors::Cors;
use actix_web::{web as actix_data, App, HttpServer};
use sqlx::PgPool;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO)
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE)
    .init();

  tracing::info!("Starting inventory API server...");

  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg),
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      panic!("Configuration error: {}", e);
    }
  };

  let db_pool = match PgPool::connect(&app_config.database_url).await {
    Ok(pool) => {
      tracing::info!("Successfully connected to the database.");
      pool
    }
    Err(e) => {
      tracing::error!(error = %e, "Failed to connect to the database.");
      panic!("Database connection error: {}", e);
    }
  };

  if let Err(e) = db::run_migrations(&db_pool).await {
    tracing::error!(error = %e, "Failed to apply database migrations.");
    panic!("Migration error: {}", e);
  }

  if app_config.seed_db {
    if let Err(e) = db::seed_products(&db_pool).await {
      tracing::error!(error = %e, "Failed to seed database.");
    }
  }

  let repository: Arc<dyn ProductRepository> = Arc::new(PgProductRepository::new(db_pool.clone()));
  let app_state = AppState {
    product_service: ProductService::new(repository),
    config: app_config.clone(),
  };

  let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone()))
      .app_data(actix_data::JsonConfig::default().error_handler(web::json_error_handler))
      .app_data(actix_data::PathConfig::default().error_handler(web::path_error_handler))
      .app_data(actix_data::QueryConfig::default().error_handler(web::query_error_handler))
      .wrap(Cors::permissive()) // Browser frontend lives on another origin
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}
