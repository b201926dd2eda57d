// catalog/src/main.rs

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use mongodb::Client;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

use product_catalog::store::{MongoProductStore, ProductStore};
use product_catalog::web::configure_app_routes;
use product_catalog::{AppConfig, AppState};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  // RUST_LOG overrides the default INFO level.
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_span_events(FmtSpan::CLOSE)
    .init();

  tracing::info!("Starting product catalog server...");

  let app_config = AppConfig::from_env().context("failed to load application configuration")?;

  // The client owns the driver's connection pool for the lifetime of the process.
  let client = Client::with_uri_str(app_config.mongodb_uri())
    .await
    .context("failed to create MongoDB client")?;
  let database = client.database(&app_config.database_name);
  let store = MongoProductStore::new(&database);

  match store.ping().await {
    Ok(()) => tracing::info!(database = %app_config.database_name, "Connected to MongoDB."),
    Err(e) => tracing::warn!(error = %e, "MongoDB is not reachable yet; requests will fail until it is."),
  }

  let app_state = AppState::new(Arc::new(store));
  let cors_origin = app_config.cors_allowed_origin.clone();

  let server_address = app_config.server_address();
  tracing::info!("Attempting to bind server to {}...", server_address);

  let server = HttpServer::new(move || {
    let cors = Cors::default()
      .allowed_origin(&cors_origin)
      .allow_any_method()
      .allow_any_header()
      .supports_credentials();

    App::new()
      .app_data(web::Data::new(app_state.clone()))
      .wrap(cors)
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(configure_app_routes)
  })
  .bind(&server_address)
  .with_context(|| format!("failed to bind {}", server_address))?
  .run();

  let served = server.await;

  drop(database);
  client.shutdown().await;
  tracing::info!("MongoDB connection closed.");

  served.context("HTTP server terminated with an error")
}
