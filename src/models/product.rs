// src/models/product.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::collections::HashMap;

/// The persisted inventory record. `id` and `created_at` are assigned by the
/// database and immutable; `updated_at` is refreshed on every mutation.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Product {
  pub id: i64,
  pub name: String,
  pub description: Option<String>,
  pub price: Decimal,
  pub quantity: i32,
  pub category: String,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// Wire-facing shape of a product, used both for request bodies and for
/// response payloads. On input `id` and the timestamps are ignored; on output
/// every field is populated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductRecord {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub id: Option<i64>,
  pub name: Option<String>,
  pub description: Option<String>,
  pub price: Option<Decimal>,
  pub quantity: Option<i32>,
  pub category: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub created_at: Option<DateTime<Utc>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub updated_at: Option<DateTime<Utc>>,
}

/// A validated, fully-populated write payload extracted from a
/// [`ProductRecord`].
#[derive(Debug, Clone)]
pub struct ProductInput {
  pub name: String,
  pub description: Option<String>,
  pub price: Decimal,
  pub quantity: i32,
  pub category: String,
}

impl ProductRecord {
  /// Checks the required fields (name non-blank, price and quantity present
  /// and non-negative) and returns either a [`ProductInput`] or a map of
  /// field name to error message.
  pub fn validate(&self) -> Result<ProductInput, HashMap<String, String>> {
    let mut errors = HashMap::new();

    let name = self.name.as_deref().map(str::trim).unwrap_or("");
    if name.is_empty() {
      errors.insert("name".to_string(), "Product name is required".to_string());
    }

    match self.price {
      None => {
        errors.insert("price".to_string(), "Product price is required".to_string());
      }
      Some(price) if price < Decimal::ZERO => {
        errors.insert(
          "price".to_string(),
          "Product price must be greater than or equal to 0".to_string(),
        );
      }
      Some(_) => {}
    }

    match self.quantity {
      None => {
        errors.insert("quantity".to_string(), "Product quantity is required".to_string());
      }
      Some(quantity) if quantity < 0 => {
        errors.insert(
          "quantity".to_string(),
          "Product quantity must be greater than or equal to 0".to_string(),
        );
      }
      Some(_) => {}
    }

    if !errors.is_empty() {
      return Err(errors);
    }

    Ok(ProductInput {
      name: name.to_string(),
      description: self.description.clone(),
      // Checked above; missing price/quantity never reaches this point.
      price: self.price.unwrap_or_default(),
      quantity: self.quantity.unwrap_or_default(),
      category: self.category.clone().unwrap_or_default(),
    })
  }
}

impl From<Product> for ProductRecord {
  fn from(product: Product) -> Self {
    ProductRecord {
      id: Some(product.id),
      name: Some(product.name),
      description: product.description,
      price: Some(product.price),
      quantity: Some(product.quantity),
      category: Some(product.category),
      created_at: Some(product.created_at),
      updated_at: Some(product.updated_at),
    }
  }
}
