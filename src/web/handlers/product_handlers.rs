// src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::models::ProductRecord;
use crate::services::product_service::DEFAULT_LOW_STOCK_THRESHOLD;
use crate::state::AppState;
use crate::web::response::ApiResponse;

#[derive(Deserialize, Debug)]
pub struct SearchQuery {
  pub q: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct LowStockQuery {
  pub threshold: Option<i32>,
}

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let products = app_state.product_service.get_all_products().await?;
  info!("Fetched {} products.", products.len());
  Ok(HttpResponse::Ok().json(ApiResponse::ok(products, "Products retrieved successfully")))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let id = path.into_inner();
  match app_state.product_service.get_product_by_id(id).await? {
    Some(product) => Ok(HttpResponse::Ok().json(ApiResponse::ok(product, "Product retrieved successfully"))),
    None => Err(AppError::NotFound(format!("Product not found with id: {}", id))),
  }
}

#[instrument(name = "handler::create_product", skip(app_state, body))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  body: web::Json<ProductRecord>,
) -> Result<HttpResponse, AppError> {
  let input = body.validate().map_err(AppError::Validation)?;
  let created = app_state.product_service.create_product(input).await?;
  info!(product_id = ?created.id, "Product created.");
  Ok(HttpResponse::Created().json(ApiResponse::ok(created, "Product created successfully")))
}

#[instrument(name = "handler::update_product", skip(app_state, path, body), fields(product_id = %path.as_ref()))]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
  body: web::Json<ProductRecord>,
) -> Result<HttpResponse, AppError> {
  let id = path.into_inner();
  let input = body.validate().map_err(AppError::Validation)?;
  let updated = app_state.product_service.update_product(id, input).await?;
  Ok(HttpResponse::Ok().json(ApiResponse::ok(updated, "Product updated successfully")))
}

#[instrument(name = "handler::delete_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let id = path.into_inner();
  app_state.product_service.delete_product(id).await?;
  info!(product_id = id, "Product deleted.");
  Ok(HttpResponse::Ok().json(ApiResponse::message_only("Product deleted successfully")))
}

#[instrument(name = "handler::search_products", skip(app_state, query))]
pub async fn search_products_handler(
  app_state: web::Data<AppState>,
  query: web::Query<SearchQuery>,
) -> Result<HttpResponse, AppError> {
  let products = app_state.product_service.search_products(query.q.as_deref()).await?;
  Ok(HttpResponse::Ok().json(ApiResponse::ok(products, "Search completed successfully")))
}

#[instrument(name = "handler::products_by_category", skip(app_state, path), fields(category = %path.as_ref()))]
pub async fn products_by_category_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let category = path.into_inner();
  let products = app_state.product_service.get_products_by_category(&category).await?;
  Ok(HttpResponse::Ok().json(ApiResponse::ok(products, "Products retrieved successfully")))
}

#[instrument(name = "handler::low_stock_products", skip(app_state, query))]
pub async fn low_stock_products_handler(
  app_state: web::Data<AppState>,
  query: web::Query<LowStockQuery>,
) -> Result<HttpResponse, AppError> {
  let threshold = query.threshold.unwrap_or(DEFAULT_LOW_STOCK_THRESHOLD);
  let products = app_state.product_service.get_low_stock_products(threshold).await?;
  Ok(HttpResponse::Ok().json(ApiResponse::ok(
    products,
    "Low stock products retrieved successfully",
  )))
}
