// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper

use async_trait::async_trait;
use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use product_catalog::models::{NewProduct, Product, ProductPatch};
use product_catalog::store::ProductStore;
use product_catalog::{AppError, Result};
use tracing::Level;

/// Builds the full route table over the given store, the same way `main` does.
#[allow(unused_macros)]
macro_rules! init_app {
  ($store:expr) => {
    actix_web::test::init_service(
      actix_web::App::new()
        .app_data(actix_web::web::Data::new(product_catalog::AppState::new($store)))
        .configure(product_catalog::web::configure_app_routes),
    )
    .await
  };
}

pub fn setup_tracing() {
  let _ = tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init();
}

// --- In-memory store ---
// Ids are real ObjectIds and lookups parse them, like the MongoDB store.
#[derive(Default)]
pub struct InMemoryProductStore {
  inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
  products: Vec<Product>,
}

impl InMemoryProductStore {
  pub fn len(&self) -> usize {
    self.inner.lock().products.len()
  }
}

fn same_id(product: &Product, id: &str) -> bool {
  ObjectId::parse_str(id).is_ok_and(|oid| oid.to_hex() == product.id)
}

/// Same merge rule as the `$set` document the MongoDB store sends.
fn merge_patch(product: &mut Product, patch: &ProductPatch, now: DateTime<Utc>) {
  if let Some(name) = &patch.name {
    product.name = name.clone();
  }
  if let Some(price) = patch.price {
    product.price = price;
  }
  if let Some(description) = &patch.description {
    product.description = Some(description.clone());
  }
  if let Some(stock) = patch.stock {
    product.stock = stock;
  }
  product.updated_at = now;
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
  async fn create(&self, product: NewProduct) -> Result<Product> {
    let now = Utc::now();
    let mut inner = self.inner.lock();
    let stored = Product {
      id: ObjectId::new().to_hex(),
      name: product.name,
      price: product.price,
      description: product.description,
      stock: product.stock,
      created_at: now,
      updated_at: now,
    };
    inner.products.push(stored.clone());
    Ok(stored)
  }

  async fn get(&self, id: &str) -> Result<Option<Product>> {
    Ok(self.inner.lock().products.iter().find(|p| same_id(p, id)).cloned())
  }

  async fn list(&self, skip: u64, limit: u64) -> Result<Vec<Product>> {
    Ok(
      self
        .inner
        .lock()
        .products
        .iter()
        .skip(skip as usize)
        .take(limit as usize)
        .cloned()
        .collect(),
    )
  }

  async fn update(&self, id: &str, patch: ProductPatch) -> Result<Option<Product>> {
    let mut inner = self.inner.lock();
    Ok(inner.products.iter_mut().find(|p| same_id(p, id)).map(|product| {
      merge_patch(product, &patch, Utc::now());
      product.clone()
    }))
  }

  async fn delete(&self, id: &str) -> Result<bool> {
    let mut inner = self.inner.lock();
    let before = inner.products.len();
    inner.products.retain(|p| !same_id(p, id));
    Ok(inner.products.len() + 1 == before)
  }

  async fn search(&self, term: &str) -> Result<Vec<Product>> {
    let needle = term.to_lowercase();
    let contains = |text: &str| text.to_lowercase().contains(&needle);
    Ok(
      self
        .inner
        .lock()
        .products
        .iter()
        .filter(|p| contains(&p.name) || p.description.as_deref().is_some_and(contains))
        .cloned()
        .collect(),
    )
  }

  async fn ping(&self) -> Result<()> {
    Ok(())
  }
}

// --- Store whose backend is always down ---
pub struct UnavailableStore;

fn unavailable() -> AppError {
  AppError::Internal("server selection timeout: no available servers".to_string())
}

#[async_trait]
impl ProductStore for UnavailableStore {
  async fn create(&self, _product: NewProduct) -> Result<Product> {
    Err(unavailable())
  }

  async fn get(&self, _id: &str) -> Result<Option<Product>> {
    Err(unavailable())
  }

  async fn list(&self, _skip: u64, _limit: u64) -> Result<Vec<Product>> {
    Err(unavailable())
  }

  async fn update(&self, _id: &str, _patch: ProductPatch) -> Result<Option<Product>> {
    Err(unavailable())
  }

  async fn delete(&self, _id: &str) -> Result<bool> {
    Err(unavailable())
  }

  async fn search(&self, _term: &str) -> Result<Vec<Product>> {
    Err(unavailable())
  }

  async fn ping(&self) -> Result<()> {
    Err(unavailable())
  }
}

pub fn new_product(name: &str, price: f64, description: Option<&str>) -> NewProduct {
  NewProduct {
    name: name.to_string(),
    price,
    description: description.map(str::to_string),
    stock: 0,
  }
}
