// catalog/src/store/mod.rs

//! Data access for products.
//!
//! Handlers only ever see [`ProductStore`]; the MongoDB-backed
//! implementation lives in [`mongo`].

pub mod mongo;

pub use mongo::MongoProductStore;

use crate::errors::Result;
use crate::models::{NewProduct, Product, ProductPatch};
use async_trait::async_trait;

#[async_trait]
pub trait ProductStore: Send + Sync {
  /// Stores a new product stamped with the current time and returns it as stored.
  async fn create(&self, product: NewProduct) -> Result<Product>;

  /// `Ok(None)` when no product has this id, including ids that are not
  /// well-formed.
  async fn get(&self, id: &str) -> Result<Option<Product>>;

  /// One page in the collection's natural order.
  async fn list(&self, skip: u64, limit: u64) -> Result<Vec<Product>>;

  /// Merges the non-null fields of `patch` and refreshes `updated_at`.
  /// `Ok(None)` when the product does not exist or nothing was modified.
  async fn update(&self, id: &str, patch: ProductPatch) -> Result<Option<Product>>;

  /// `true` iff exactly one product was removed.
  async fn delete(&self, id: &str) -> Result<bool>;

  /// Case-insensitive substring match on name or description.
  async fn search(&self, term: &str) -> Result<Vec<Product>>;

  async fn ping(&self) -> Result<()>;
}
