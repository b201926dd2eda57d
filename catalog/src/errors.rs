// catalog/src/errors.rs

use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Database(#[from] mongodb::error::Error),

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

impl AppError {
  /// Prefixes server-side failures with the action that was being performed,
  /// e.g. `"Error creating product: Database Error: ..."`.
  ///
  /// Not-found and validation errors pass through untouched so they keep
  /// their 404/422 status.
  pub fn context(self, action: &str) -> Self {
    match self {
      AppError::NotFound(_) | AppError::Validation(_) => self,
      AppError::Internal(m) => AppError::Internal(format!("{}: {}", action, m)),
      other => AppError::Internal(format!("{}: {}", action, other)),
    }
  }

  /// Bodies that parse as JSON but don't fit the payload type are validation
  /// failures; anything unreadable as JSON is treated as an internal failure.
  pub fn from_json_payload(err: JsonPayloadError) -> Self {
    match &err {
      JsonPayloadError::Deserialize(e) if e.is_data() => AppError::Validation(format!("Invalid request body: {}", e)),
      _ => AppError::Internal(format!("Error reading request body: {}", err)),
    }
  }

  pub fn from_query_payload(err: QueryPayloadError) -> Self {
    AppError::Validation(format!("Invalid query parameters: {}", err))
  }

  fn detail(&self) -> String {
    match self {
      AppError::Validation(m) | AppError::NotFound(m) | AppError::Config(m) | AppError::Internal(m) => m.clone(),
      AppError::Database(e) => e.to_string(),
    }
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::Config(_) | AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    if status.is_server_error() {
      tracing::error!(application_error = %self, "Responding with error");
    } else {
      tracing::warn!(application_error = %self, "Responding with client error");
    }
    HttpResponse::build(status).json(json!({ "detail": self.detail() }))
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
