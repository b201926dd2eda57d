// catalog/src/lib.rs

//! Product catalog CRUD service.
//!
//! The [`store`] module maps typed product operations onto a MongoDB
//! collection; the [`web`] module exposes them as a JSON REST API.

pub mod config;
pub mod errors;
pub mod models;
pub mod state;
pub mod store;
pub mod web;

pub use config::AppConfig;
pub use errors::{AppError, Result};
pub use state::AppState;
