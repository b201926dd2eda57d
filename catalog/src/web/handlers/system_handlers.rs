// catalog/src/web/handlers/system_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{instrument, warn};

use crate::state::AppState;

pub async fn root_handler() -> HttpResponse {
  HttpResponse::Ok().json(json!({
      "message": "Products CRUD API",
      "version": env!("CARGO_PKG_VERSION")
  }))
}

/// Always answers 200; database reachability is reported in the body.
#[instrument(name = "handler::health_check", skip(app_state))]
pub async fn health_check_handler(app_state: web::Data<AppState>) -> HttpResponse {
  match app_state.products.list(0, 1).await {
    Ok(_) => HttpResponse::Ok().json(json!({
        "status": "healthy",
        "database": "connected",
        "message": "API is running correctly"
    })),
    Err(e) => {
      warn!(error = %e, "Health check failed to reach the database.");
      HttpResponse::Ok().json(json!({
          "status": "unhealthy",
          "database": "disconnected",
          "message": format!("Error: {}", e)
      }))
    }
  }
}
