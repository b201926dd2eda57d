// catalog/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::models::{NewProduct, ProductPatch};
use crate::state::AppState;

pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;

fn default_limit() -> i64 {
  DEFAULT_LIMIT
}

#[derive(Deserialize, Debug)]
pub struct ListProductsQuery {
  #[serde(default)]
  pub skip: i64,
  #[serde(default = "default_limit")]
  pub limit: i64,
}

impl ListProductsQuery {
  /// Returns `(skip, limit)` once both are inside their bounds.
  pub fn validate(&self) -> Result<(u64, u64), AppError> {
    let skip = u64::try_from(self.skip)
      .map_err(|_| AppError::Validation(format!("skip must be >= 0, got {}", self.skip)))?;
    if !(1..=MAX_LIMIT).contains(&self.limit) {
      return Err(AppError::Validation(format!(
        "limit must be between 1 and {}, got {}",
        MAX_LIMIT, self.limit
      )));
    }
    Ok((skip, self.limit as u64))
  }
}

fn product_not_found(product_id: &str) -> AppError {
  warn!(product_id = %product_id, "Product not found.");
  AppError::NotFound("Product not found".to_string())
}

#[instrument(name = "handler::create_product", skip(app_state, payload))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<NewProduct>,
) -> Result<HttpResponse, AppError> {
  let product = app_state
    .products
    .create(payload.into_inner())
    .await
    .map_err(|e| e.context("Error creating product"))?;

  info!(product_id = %product.id, "Product created.");
  Ok(HttpResponse::Created().json(json!({
      "message": "Product created successfully",
      "product": product
  })))
}

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(
  app_state: web::Data<AppState>,
  query_params: web::Query<ListProductsQuery>,
) -> Result<HttpResponse, AppError> {
  let (skip, limit) = query_params.validate()?;

  let products = app_state
    .products
    .list(skip, limit)
    .await
    .map_err(|e| e.context("Error fetching products"))?;

  info!("Fetched {} products.", products.len());
  Ok(HttpResponse::Ok().json(json!({
      "message": "Products fetched successfully",
      "total": products.len(),
      "products": products,
      "skip": skip,
      "limit": limit
  })))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  match app_state
    .products
    .get(&product_id)
    .await
    .map_err(|e| e.context("Error fetching product"))?
  {
    Some(product) => Ok(HttpResponse::Ok().json(json!({
        "message": "Product found",
        "product": product
    }))),
    None => Err(product_not_found(&product_id)),
  }
}

#[instrument(name = "handler::update_product", skip(app_state, path, payload), fields(product_id = %path.as_ref()))]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  payload: web::Json<ProductPatch>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  let updated = app_state
    .products
    .update(&product_id, payload.into_inner())
    .await
    .map_err(|e| e.context("Error updating product"))?;

  match updated {
    Some(product) => {
      info!("Product updated.");
      Ok(HttpResponse::Ok().json(json!({
          "message": "Product updated successfully",
          "product": product
      })))
    }
    None => {
      warn!(product_id = %product_id, "Product not found or not modified.");
      Err(AppError::NotFound(
        "Product not found or could not be updated".to_string(),
      ))
    }
  }
}

#[instrument(name = "handler::delete_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  let deleted = app_state
    .products
    .delete(&product_id)
    .await
    .map_err(|e| e.context("Error deleting product"))?;

  if !deleted {
    return Err(product_not_found(&product_id));
  }

  info!("Product deleted.");
  Ok(HttpResponse::Ok().json(json!({
      "message": "Product deleted successfully",
      "product_id": product_id
  })))
}

#[instrument(name = "handler::search_products", skip(app_state, path), fields(search_term = %path.as_ref()))]
pub async fn search_products_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let search_term = path.into_inner();

  let products = app_state
    .products
    .search(&search_term)
    .await
    .map_err(|e| e.context("Error searching products"))?;

  info!("Search matched {} products.", products.len());
  Ok(HttpResponse::Ok().json(json!({
      "message": format!("Search completed for: {}", search_term),
      "total": products.len(),
      "products": products
  })))
}
