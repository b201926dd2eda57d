// catalog/src/models/product.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A product as returned to clients. `id` is the hex form of the stored
/// document identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
  pub id: String,
  pub name: String,
  pub price: f64,
  pub description: Option<String>,
  pub stock: i64,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// Body of a create request. Timestamps and ids sent by the client are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewProduct {
  pub name: String,
  pub price: f64,
  pub description: Option<String>,
  #[serde(default)]
  pub stock: i64,
}

/// Body of an update request. `None` covers both an absent key and an
/// explicit `null`; either way the stored value is left alone.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductPatch {
  pub name: Option<String>,
  pub price: Option<f64>,
  pub description: Option<String>,
  pub stock: Option<i64>,
}
