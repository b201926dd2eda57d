// catalog/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::fmt;

const MONGODB_SCHEME: &str = "mongodb://";

#[derive(Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub database_name: String,
  pub cors_allowed_origin: String,
  // Carries credentials, kept out of Debug output.
  mongodb_uri: String,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|var_name| env::var(var_name).ok())
  }

  /// Builds the configuration from an arbitrary variable source.
  ///
  /// `MONGODB_URL`, `MONGO_INITDB_ROOT_USERNAME`, `MONGO_INITDB_ROOT_PASSWORD`
  /// and `DATABASE_NAME` are required; an unset or blank value is an error.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get_env = |var_name: &str| {
      lookup(var_name)
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| AppError::Config(format!("Missing environment variable '{}'", var_name)))
    };

    let mongodb_url = get_env("MONGODB_URL")?;
    let username = get_env("MONGO_INITDB_ROOT_USERNAME")?;
    let password = get_env("MONGO_INITDB_ROOT_PASSWORD")?;
    let database_name = get_env("DATABASE_NAME")?;

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|_| "8000".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;
    let cors_allowed_origin = get_env("CORS_ALLOWED_ORIGIN").unwrap_or_else(|_| "http://localhost:5173".to_string());

    let config = Self {
      server_host,
      server_port,
      database_name,
      cors_allowed_origin,
      mongodb_uri: connection_uri(&mongodb_url, &username, &password),
    };

    tracing::info!(config = ?config, "Application configuration loaded successfully.");
    Ok(config)
  }

  pub fn mongodb_uri(&self) -> &str {
    &self.mongodb_uri
  }

  pub fn server_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}

impl fmt::Debug for AppConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("AppConfig")
      .field("server_host", &self.server_host)
      .field("server_port", &self.server_port)
      .field("database_name", &self.database_name)
      .field("cors_allowed_origin", &self.cors_allowed_origin)
      .field("mongodb_uri", &"[REDACTED]")
      .finish()
  }
}

/// `MONGODB_URL` may or may not carry the scheme; credentials are spliced in
/// front of the host part either way.
fn connection_uri(base_url: &str, username: &str, password: &str) -> String {
  let host = base_url.strip_prefix(MONGODB_SCHEME).unwrap_or(base_url);
  format!("{}{}:{}@{}", MONGODB_SCHEME, username, password, host)
}
