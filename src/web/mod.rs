// src/web/mod.rs

pub mod handlers;
pub mod response;
pub mod routes;

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse};
use serde_json::json;

fn bad_request_envelope(message: String) -> HttpResponse {
  HttpResponse::BadRequest().json(json!({
    "success": false,
    "message": message
  }))
}

/// Rewraps actix's JSON deserialization failures into the response envelope,
/// so a malformed body gets the same `{success, message}` shape as every
/// other failure.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
  let response = bad_request_envelope(format!("Invalid request body: {}", err));
  actix_web::error::InternalError::from_response(err, response).into()
}

/// Same treatment for path parameter extraction failures (e.g. a non-numeric
/// id segment).
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
  let response = bad_request_envelope(format!("Invalid path parameter: {}", err));
  actix_web::error::InternalError::from_response(err, response).into()
}

/// Same treatment for query string extraction failures (e.g. a non-numeric
/// threshold).
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
  let response = bad_request_envelope(format!("Invalid query parameter: {}", err));
  actix_web::error::InternalError::from_response(err, response).into()
}
