// catalog/src/state.rs
use crate::store::ProductStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub products: Arc<dyn ProductStore>,
}

impl AppState {
  pub fn new(products: Arc<dyn ProductStore>) -> Self {
    Self { products }
  }
}
