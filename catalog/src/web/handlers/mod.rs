// catalog/src/web/handlers/mod.rs

pub mod product_handlers;
pub mod system_handlers;
