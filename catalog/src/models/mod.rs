// catalog/src/models/mod.rs

//! Data structures exchanged with API clients.

pub mod product;

pub use product::{NewProduct, Product, ProductPatch};
