// catalog/src/web/routes.rs

use actix_web::web;

use crate::errors::AppError;
use crate::web::handlers::{product_handlers, system_handlers};

/// Routes extractor failures through [`AppError`] so they share the JSON error body.
fn json_config() -> web::JsonConfig {
  web::JsonConfig::default().error_handler(|err, _req| AppError::from_json_payload(err).into())
}

fn query_config() -> web::QueryConfig {
  web::QueryConfig::default().error_handler(|err, _req| AppError::from_query_payload(err).into())
}

// Called from `main.rs` and the integration tests to mount every endpoint.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(json_config())
    .app_data(query_config())
    .route("/", web::get().to(system_handlers::root_handler))
    .route("/health", web::get().to(system_handlers::health_check_handler))
    .service(
      web::scope("/products")
        // Both `/products` and `/products/` are served.
        .service(
          web::resource(vec!["", "/"])
            .route(web::get().to(product_handlers::list_products_handler))
            .route(web::post().to(product_handlers::create_product_handler)),
        )
        .route(
          "/search/{search_term}",
          web::get().to(product_handlers::search_products_handler),
        )
        .service(
          web::resource("/{product_id}")
            .route(web::get().to(product_handlers::get_product_handler))
            .route(web::put().to(product_handlers::update_product_handler))
            .route(web::delete().to(product_handlers::delete_product_handler)),
        ),
    );
}
