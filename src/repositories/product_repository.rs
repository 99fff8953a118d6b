// src/repositories/product_repository.rs

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{Product, ProductInput};

const PRODUCT_COLUMNS: &str = "id, name, description, price, quantity, category, created_at, updated_at";

/// Query primitives over the `products` table. The service layer composes
/// these; the implementations translate them into single statements and
/// nothing more.
#[async_trait]
pub trait ProductRepository: Send + Sync {
  async fn find_all_ordered_by_created_desc(&self) -> Result<Vec<Product>, sqlx::Error>;

  async fn find_by_id(&self, id: i64) -> Result<Option<Product>, sqlx::Error>;

  async fn exists_by_id(&self, id: i64) -> Result<bool, sqlx::Error>;

  /// Case-insensitive exact-name existence check, the basis of the
  /// write-path uniqueness rule.
  async fn exists_by_name_ignore_case(&self, name: &str) -> Result<bool, sqlx::Error>;

  /// Case-insensitive substring match on name. Available at this layer but
  /// not exposed through the HTTP contract.
  async fn find_by_name_containing(&self, name: &str) -> Result<Vec<Product>, sqlx::Error>;

  /// Case-insensitive substring match on category.
  async fn find_by_category_containing(&self, category: &str) -> Result<Vec<Product>, sqlx::Error>;

  /// Case-insensitive substring match against name OR description.
  async fn search_by_name_or_description(&self, term: &str) -> Result<Vec<Product>, sqlx::Error>;

  /// Products with `quantity <= threshold`.
  async fn find_by_quantity_at_most(&self, threshold: i32) -> Result<Vec<Product>, sqlx::Error>;

  /// Inserts a new product; the database assigns id and timestamps.
  async fn insert(&self, input: &ProductInput) -> Result<Product, sqlx::Error>;

  /// Full replace of the mutable fields; `updated_at` is refreshed by the
  /// statement itself.
  async fn update(&self, id: i64, input: &ProductInput) -> Result<Product, sqlx::Error>;

  /// Returns the number of rows removed (0 or 1).
  async fn delete_by_id(&self, id: i64) -> Result<u64, sqlx::Error>;
}

/// PostgreSQL-backed implementation over a shared connection pool.
#[derive(Clone)]
pub struct PgProductRepository {
  pool: PgPool,
}

impl PgProductRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
  async fn find_all_ordered_by_created_desc(&self) -> Result<Vec<Product>, sqlx::Error> {
    sqlx::query_as(&format!(
      "SELECT {} FROM products ORDER BY created_at DESC",
      PRODUCT_COLUMNS
    ))
    .fetch_all(&self.pool)
    .await
  }

  async fn find_by_id(&self, id: i64) -> Result<Option<Product>, sqlx::Error> {
    sqlx::query_as(&format!("SELECT {} FROM products WHERE id = $1", PRODUCT_COLUMNS))
      .bind(id)
      .fetch_optional(&self.pool)
      .await
  }

  async fn exists_by_id(&self, id: i64) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)")
      .bind(id)
      .fetch_one(&self.pool)
      .await
  }

  async fn exists_by_name_ignore_case(&self, name: &str) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM products WHERE LOWER(name) = LOWER($1))")
      .bind(name)
      .fetch_one(&self.pool)
      .await
  }

  async fn find_by_name_containing(&self, name: &str) -> Result<Vec<Product>, sqlx::Error> {
    sqlx::query_as(&format!(
      "SELECT {} FROM products WHERE name ILIKE '%' || $1 || '%'",
      PRODUCT_COLUMNS
    ))
    .bind(name)
    .fetch_all(&self.pool)
    .await
  }

  async fn find_by_category_containing(&self, category: &str) -> Result<Vec<Product>, sqlx::Error> {
    sqlx::query_as(&format!(
      "SELECT {} FROM products WHERE category ILIKE '%' || $1 || '%'",
      PRODUCT_COLUMNS
    ))
    .bind(category)
    .fetch_all(&self.pool)
    .await
  }

  async fn search_by_name_or_description(&self, term: &str) -> Result<Vec<Product>, sqlx::Error> {
    sqlx::query_as(&format!(
      "SELECT {} FROM products \
       WHERE name ILIKE '%' || $1 || '%' OR description ILIKE '%' || $1 || '%'",
      PRODUCT_COLUMNS
    ))
    .bind(term)
    .fetch_all(&self.pool)
    .await
  }

  async fn find_by_quantity_at_most(&self, threshold: i32) -> Result<Vec<Product>, sqlx::Error> {
    sqlx::query_as(&format!(
      "SELECT {} FROM products WHERE quantity <= $1",
      PRODUCT_COLUMNS
    ))
    .bind(threshold)
    .fetch_all(&self.pool)
    .await
  }

  async fn insert(&self, input: &ProductInput) -> Result<Product, sqlx::Error> {
    sqlx::query_as(&format!(
      "INSERT INTO products (name, description, price, quantity, category) \
       VALUES ($1, $2, $3, $4, $5) \
       RETURNING {}",
      PRODUCT_COLUMNS
    ))
    .bind(&input.name)
    .bind(&input.description)
    .bind(input.price)
    .bind(input.quantity)
    .bind(&input.category)
    .fetch_one(&self.pool)
    .await
  }

  async fn update(&self, id: i64, input: &ProductInput) -> Result<Product, sqlx::Error> {
    sqlx::query_as(&format!(
      "UPDATE products \
       SET name = $2, description = $3, price = $4, quantity = $5, category = $6, updated_at = now() \
       WHERE id = $1 \
       RETURNING {}",
      PRODUCT_COLUMNS
    ))
    .bind(id)
    .bind(&input.name)
    .bind(&input.description)
    .bind(input.price)
    .bind(input.quantity)
    .bind(&input.category)
    .fetch_one(&self.pool)
    .await
  }

  async fn delete_by_id(&self, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
      .bind(id)
      .execute(&self.pool)
      .await?;
    Ok(result.rows_affected())
  }
}
