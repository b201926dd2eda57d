// catalog/src/store/mongo.rs

use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use bson::{doc, Document};
use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::ProductStore;
use crate::errors::{AppError, Result};
use crate::models::{NewProduct, Product, ProductPatch};

pub const PRODUCTS_COLLECTION: &str = "products";

/// Stored shape of a product. `_id` is absent until the driver assigns one on insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ProductDocument {
  #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
  pub id: Option<ObjectId>,
  pub name: String,
  pub price: f64,
  pub description: Option<String>,
  #[serde(default)]
  pub stock: i64,
  #[serde(with = "chrono_datetime_as_bson_datetime")]
  pub created_at: DateTime<Utc>,
  #[serde(with = "chrono_datetime_as_bson_datetime")]
  pub updated_at: DateTime<Utc>,
}

impl ProductDocument {
  pub fn new(product: NewProduct, now: DateTime<Utc>) -> Self {
    Self {
      id: None,
      name: product.name,
      price: product.price,
      description: product.description,
      stock: product.stock,
      created_at: now,
      updated_at: now,
    }
  }

  pub fn into_product(self) -> Result<Product> {
    let id = self
      .id
      .ok_or_else(|| AppError::Internal("stored product has no _id".to_string()))?;
    Ok(Product {
      id: id.to_hex(),
      name: self.name,
      price: self.price,
      description: self.description,
      stock: self.stock,
      created_at: self.created_at,
      updated_at: self.updated_at,
    })
  }
}

/// Malformed ids can never match a document, so they are reported the same
/// way as unknown ones.
fn parse_id(id: &str) -> Option<ObjectId> {
  ObjectId::parse_str(id).ok()
}

pub(crate) fn update_document(patch: &ProductPatch, now: DateTime<Utc>) -> Document {
  let mut set = Document::new();
  if let Some(name) = &patch.name {
    set.insert("name", name.as_str());
  }
  if let Some(price) = patch.price {
    set.insert("price", price);
  }
  if let Some(description) = &patch.description {
    set.insert("description", description.as_str());
  }
  if let Some(stock) = patch.stock {
    set.insert("stock", stock);
  }
  set.insert("updated_at", bson::DateTime::from_chrono(now));
  doc! { "$set": set }
}

/// The term is escaped, so it always matches literally.
pub(crate) fn search_filter(term: &str) -> Document {
  let pattern = regex::escape(term);
  doc! {
    "$or": [
      { "name": { "$regex": pattern.as_str(), "$options": "i" } },
      { "description": { "$regex": pattern.as_str(), "$options": "i" } },
    ]
  }
}

/// [`ProductStore`] over the `products` collection of a MongoDB database.
#[derive(Clone)]
pub struct MongoProductStore {
  database: Database,
  collection: Collection<ProductDocument>,
}

impl MongoProductStore {
  pub fn new(database: &Database) -> Self {
    Self {
      database: database.clone(),
      collection: database.collection(PRODUCTS_COLLECTION),
    }
  }

  async fn find_by_id(&self, id: ObjectId) -> Result<Option<Product>> {
    self
      .collection
      .find_one(doc! { "_id": id })
      .await?
      .map(ProductDocument::into_product)
      .transpose()
  }

  async fn collect(&self, filter: Document, skip: Option<u64>, limit: Option<i64>) -> Result<Vec<Product>> {
    let mut find = self.collection.find(filter);
    if let Some(skip) = skip {
      find = find.skip(skip);
    }
    if let Some(limit) = limit {
      find = find.limit(limit);
    }
    let documents: Vec<ProductDocument> = find.await?.try_collect().await?;
    documents.into_iter().map(ProductDocument::into_product).collect()
  }
}

#[async_trait]
impl ProductStore for MongoProductStore {
  #[instrument(name = "store::create", skip(self, product), fields(name = %product.name))]
  async fn create(&self, product: NewProduct) -> Result<Product> {
    let document = ProductDocument::new(product, Utc::now());
    let result = self.collection.insert_one(&document).await?;
    let id = result
      .inserted_id
      .as_object_id()
      .ok_or_else(|| AppError::Internal(format!("unexpected inserted id {}", result.inserted_id)))?;
    debug!(product_id = %id, "Inserted product document.");

    self
      .find_by_id(id)
      .await?
      .ok_or_else(|| AppError::Internal(format!("created product {} could not be read back", id)))
  }

  #[instrument(name = "store::get", skip(self))]
  async fn get(&self, id: &str) -> Result<Option<Product>> {
    match parse_id(id) {
      Some(oid) => self.find_by_id(oid).await,
      None => {
        debug!("Malformed product id.");
        Ok(None)
      }
    }
  }

  #[instrument(name = "store::list", skip(self))]
  async fn list(&self, skip: u64, limit: u64) -> Result<Vec<Product>> {
    let limit = i64::try_from(limit).unwrap_or(i64::MAX);
    self.collect(doc! {}, Some(skip), Some(limit)).await
  }

  #[instrument(name = "store::update", skip(self, patch))]
  async fn update(&self, id: &str, patch: ProductPatch) -> Result<Option<Product>> {
    let Some(oid) = parse_id(id) else {
      debug!("Malformed product id.");
      return Ok(None);
    };

    let result = self
      .collection
      .update_one(doc! { "_id": oid }, update_document(&patch, Utc::now()))
      .await?;
    debug!(
      matched = result.matched_count,
      modified = result.modified_count,
      "Update applied."
    );

    // A match that modified nothing is reported like a missing product.
    if result.modified_count != 1 {
      return Ok(None);
    }
    self.find_by_id(oid).await
  }

  #[instrument(name = "store::delete", skip(self))]
  async fn delete(&self, id: &str) -> Result<bool> {
    let Some(oid) = parse_id(id) else {
      debug!("Malformed product id.");
      return Ok(false);
    };
    let result = self.collection.delete_one(doc! { "_id": oid }).await?;
    Ok(result.deleted_count == 1)
  }

  #[instrument(name = "store::search", skip(self))]
  async fn search(&self, term: &str) -> Result<Vec<Product>> {
    self.collect(search_filter(term), None, None).await
  }

  async fn ping(&self) -> Result<()> {
    self.database.run_command(doc! { "ping": 1 }).await?;
    Ok(())
  }
}
