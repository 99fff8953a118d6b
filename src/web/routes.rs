// src/web/routes.rs

use actix_web::web;

use crate::web::handlers::product_handlers;

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// Called from `main.rs` (and the integration tests) to configure services
// for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api")
      .route("/health", web::get().to(health_check_handler))
      .service(
        web::scope("/products")
          // Literal routes must come before `/{id}` or they would be
          // shadowed by the path parameter.
          .route("/search", web::get().to(product_handlers::search_products_handler))
          .route("/low-stock", web::get().to(product_handlers::low_stock_products_handler))
          .route(
            "/category/{category}",
            web::get().to(product_handlers::products_by_category_handler),
          )
          .route("", web::get().to(product_handlers::list_products_handler))
          .route("", web::post().to(product_handlers::create_product_handler))
          .route("/{id}", web::get().to(product_handlers::get_product_handler))
          .route("/{id}", web::put().to(product_handlers::update_product_handler))
          .route("/{id}", web::delete().to(product_handlers::delete_product_handler)),
      ),
  );
}
