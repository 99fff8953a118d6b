// src/errors.rs

use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  /// Malformed or missing input fields; carries per-field messages.
  #[error("Validation failed")]
  Validation(HashMap<String, String>),

  /// A business rule rejected the request (duplicate product name, or an
  /// update against a missing id — the two are deliberately signalled the
  /// same way, as the API surface does not distinguish them).
  #[error("{0}")]
  BusinessRule(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

// Allow anyhow::Error to be converted into AppError::Internal for convenience
// in handlers that use `?` on functions returning anyhow::Result.
impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    match err.downcast::<sqlx::Error>() {
      Ok(db_err) => AppError::Sqlx(db_err),
      Err(err) => AppError::Internal(err.to_string()),
    }
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> actix_web::http::StatusCode {
    use actix_web::http::StatusCode;
    match self {
      AppError::Validation(_) | AppError::BusinessRule(_) => StatusCode::BAD_REQUEST,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::Config(_) | AppError::Sqlx(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    // Log the full error when it is turned into a response.
    tracing::error!(application_error = %self, "Responding with error");
    match self {
      AppError::Validation(errors) => HttpResponse::BadRequest().json(json!({
        "success": false,
        "message": "Validation failed",
        "errors": errors
      })),
      AppError::BusinessRule(m) => HttpResponse::BadRequest().json(json!({
        "success": false,
        "message": m
      })),
      AppError::NotFound(m) => HttpResponse::NotFound().json(json!({
        "success": false,
        "message": m
      })),
      AppError::Config(m) => HttpResponse::InternalServerError().json(json!({
        "success": false,
        "message": format!("Configuration error: {}", m)
      })),
      // The raw failure text is embedded in the message on purpose; see the
      // README's notes on the 500 boundary.
      AppError::Sqlx(e) => HttpResponse::InternalServerError().json(json!({
        "success": false,
        "message": format!("Database operation failed: {}", e)
      })),
      AppError::Internal(m) => HttpResponse::InternalServerError().json(json!({
        "success": false,
        "message": format!("Internal server error: {}", m)
      })),
    }
  }
}

// Define a Result type alias for the application.
pub type Result<T, E = AppError> = std::result::Result<T, E>;
