// src/state.rs

use crate::config::AppConfig;
use crate::services::ProductService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub product_service: ProductService,
  pub config: Arc<AppConfig>,
}
