// src/web/response.rs

use serde::Serialize;
use std::collections::HashMap;

/// Uniform response wrapper shared by every endpoint: a success flag, the
/// payload when there is one, a human-readable message, and field-level
/// errors on validation failures only.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
  pub success: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub data: Option<T>,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub errors: Option<HashMap<String, String>>,
}

impl<T: Serialize> ApiResponse<T> {
  pub fn ok(data: T, message: impl Into<String>) -> Self {
    Self {
      success: true,
      data: Some(data),
      message: message.into(),
      errors: None,
    }
  }
}

impl ApiResponse<serde_json::Value> {
  /// Success without a payload (e.g. delete).
  pub fn message_only(message: impl Into<String>) -> Self {
    Self {
      success: true,
      data: None,
      message: message.into(),
      errors: None,
    }
  }
}
