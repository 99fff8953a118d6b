// tests/common/mod.rs
#![allow(dead_code)] // Allow unused helpers in this common test module

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use parking_lot::Mutex;
use rust_decimal::Decimal;
use std::sync::Arc;

use inventory_api::config::AppConfig;
use inventory_api::models::{Product, ProductInput, ProductRecord};
use inventory_api::repositories::ProductRepository;
use inventory_api::services::ProductService;
use inventory_api::state::AppState;

// --- In-memory repository double ---

struct Inner {
  products: Vec<Product>,
  next_id: i64,
}

/// Stand-in for the Postgres repository: a vector behind a mutex, with
/// storage-assigned ids and monotonically spaced `created_at` values so that
/// ordering assertions are deterministic.
pub struct InMemoryProductRepository {
  inner: Mutex<Inner>,
}

impl InMemoryProductRepository {
  pub fn new() -> Self {
    Self {
      inner: Mutex::new(Inner {
        products: Vec::new(),
        next_id: 1,
      }),
    }
  }

  pub fn len(&self) -> usize {
    self.inner.lock().products.len()
  }

  fn created_at_for(id: i64) -> chrono::DateTime<Utc> {
    // Later ids get later creation times.
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap() + Duration::seconds(id)
  }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
  async fn find_all_ordered_by_created_desc(&self) -> Result<Vec<Product>, sqlx::Error> {
    let mut products = self.inner.lock().products.clone();
    products.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(products)
  }

  async fn find_by_id(&self, id: i64) -> Result<Option<Product>, sqlx::Error> {
    Ok(self.inner.lock().products.iter().find(|p| p.id == id).cloned())
  }

  async fn exists_by_id(&self, id: i64) -> Result<bool, sqlx::Error> {
    Ok(self.inner.lock().products.iter().any(|p| p.id == id))
  }

  async fn exists_by_name_ignore_case(&self, name: &str) -> Result<bool, sqlx::Error> {
    let name = name.to_lowercase();
    Ok(
      self
        .inner
        .lock()
        .products
        .iter()
        .any(|p| p.name.to_lowercase() == name),
    )
  }

  async fn find_by_name_containing(&self, name: &str) -> Result<Vec<Product>, sqlx::Error> {
    let needle = name.to_lowercase();
    Ok(
      self
        .inner
        .lock()
        .products
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .cloned()
        .collect(),
    )
  }

  async fn find_by_category_containing(&self, category: &str) -> Result<Vec<Product>, sqlx::Error> {
    let needle = category.to_lowercase();
    Ok(
      self
        .inner
        .lock()
        .products
        .iter()
        .filter(|p| p.category.to_lowercase().contains(&needle))
        .cloned()
        .collect(),
    )
  }

  async fn search_by_name_or_description(&self, term: &str) -> Result<Vec<Product>, sqlx::Error> {
    let needle = term.to_lowercase();
    Ok(
      self
        .inner
        .lock()
        .products
        .iter()
        .filter(|p| {
          p.name.to_lowercase().contains(&needle)
            || p
              .description
              .as_ref()
              .is_some_and(|d| d.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect(),
    )
  }

  async fn find_by_quantity_at_most(&self, threshold: i32) -> Result<Vec<Product>, sqlx::Error> {
    Ok(
      self
        .inner
        .lock()
        .products
        .iter()
        .filter(|p| p.quantity <= threshold)
        .cloned()
        .collect(),
    )
  }

  async fn insert(&self, input: &ProductInput) -> Result<Product, sqlx::Error> {
    let mut inner = self.inner.lock();
    let id = inner.next_id;
    inner.next_id += 1;
    let created_at = Self::created_at_for(id);
    let product = Product {
      id,
      name: input.name.clone(),
      description: input.description.clone(),
      price: input.price,
      quantity: input.quantity,
      category: input.category.clone(),
      created_at,
      updated_at: created_at,
    };
    inner.products.push(product.clone());
    Ok(product)
  }

  async fn update(&self, id: i64, input: &ProductInput) -> Result<Product, sqlx::Error> {
    let mut inner = self.inner.lock();
    let product = inner
      .products
      .iter_mut()
      .find(|p| p.id == id)
      .ok_or(sqlx::Error::RowNotFound)?;
    product.name = input.name.clone();
    product.description = input.description.clone();
    product.price = input.price;
    product.quantity = input.quantity;
    product.category = input.category.clone();
    product.updated_at = Utc::now();
    Ok(product.clone())
  }

  async fn delete_by_id(&self, id: i64) -> Result<u64, sqlx::Error> {
    let mut inner = self.inner.lock();
    let before = inner.products.len();
    inner.products.retain(|p| p.id != id);
    Ok((before - inner.products.len()) as u64)
  }
}

// --- Fixture helpers ---

pub fn input(name: &str, description: Option<&str>, price: Decimal, quantity: i32, category: &str) -> ProductInput {
  ProductInput {
    name: name.to_string(),
    description: description.map(str::to_string),
    price,
    quantity,
    category: category.to_string(),
  }
}

pub fn record(name: &str, price: Decimal, quantity: i32, category: &str) -> ProductRecord {
  ProductRecord {
    name: Some(name.to_string()),
    price: Some(price),
    quantity: Some(quantity),
    category: Some(category.to_string()),
    ..ProductRecord::default()
  }
}

pub fn service_with_repo() -> (Arc<InMemoryProductRepository>, ProductService) {
  let repo = Arc::new(InMemoryProductRepository::new());
  let service = ProductService::new(repo.clone());
  (repo, service)
}

pub fn test_state() -> AppState {
  let (_, product_service) = service_with_repo();
  AppState {
    product_service,
    config: Arc::new(test_config()),
  }
}

pub fn test_config() -> AppConfig {
  AppConfig {
    server_host: "127.0.0.1".to_string(),
    server_port: 0,
    database_url: "postgres://unused-in-tests".to_string(),
    seed_db: false,
  }
}
