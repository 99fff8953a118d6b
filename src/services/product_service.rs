// src/services/product_service.rs

use std::sync::Arc;

use tracing::instrument;

use crate::errors::{AppError, Result};
use crate::models::{ProductInput, ProductRecord};
use crate::repositories::ProductRepository;

/// Default threshold for the low-stock query when the caller does not
/// supply one.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i32 = 10;

/// Stateless product business logic, shared across all requests.
///
/// Name uniqueness is enforced here with a read-then-write existence check
/// rather than a database constraint. Two concurrent creates with the same
/// name can both pass the check; see the README for why this gap is kept.
#[derive(Clone)]
pub struct ProductService {
  repository: Arc<dyn ProductRepository>,
}

impl ProductService {
  pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
    Self { repository }
  }

  /// All products, newest created first.
  #[instrument(name = "service::get_all_products", skip(self))]
  pub async fn get_all_products(&self) -> Result<Vec<ProductRecord>> {
    let products = self.repository.find_all_ordered_by_created_desc().await?;
    Ok(products.into_iter().map(ProductRecord::from).collect())
  }

  /// Absence is not an error at this layer; the API layer decides that a
  /// missing product on a read path is a 404.
  #[instrument(name = "service::get_product_by_id", skip(self))]
  pub async fn get_product_by_id(&self, id: i64) -> Result<Option<ProductRecord>> {
    let product = self.repository.find_by_id(id).await?;
    Ok(product.map(ProductRecord::from))
  }

  #[instrument(name = "service::create_product", skip(self, input), fields(product_name = %input.name))]
  pub async fn create_product(&self, input: ProductInput) -> Result<ProductRecord> {
    if self.repository.exists_by_name_ignore_case(&input.name).await? {
      return Err(AppError::BusinessRule(format!(
        "Product with name '{}' already exists",
        input.name
      )));
    }

    let created = self.repository.insert(&input).await?;
    Ok(ProductRecord::from(created))
  }

  /// Full replace of every mutable field. A missing id is signalled through
  /// the same business-rule path as a duplicate name, matching the API
  /// surface which reports both as 400.
  #[instrument(name = "service::update_product", skip(self, input), fields(product_name = %input.name))]
  pub async fn update_product(&self, id: i64, input: ProductInput) -> Result<ProductRecord> {
    let existing = self
      .repository
      .find_by_id(id)
      .await?
      .ok_or_else(|| AppError::BusinessRule(format!("Product not found with id: {}", id)))?;

    // Renaming to a name another product already holds is rejected; keeping
    // the current name (in any casing) is not a collision with itself. The
    // comparison must match the repository's Unicode notion of
    // case-insensitivity, not an ASCII one.
    if existing.name.to_lowercase() != input.name.to_lowercase()
      && self.repository.exists_by_name_ignore_case(&input.name).await?
    {
      return Err(AppError::BusinessRule(format!(
        "Product with name '{}' already exists",
        input.name
      )));
    }

    let updated = self.repository.update(existing.id, &input).await?;
    Ok(ProductRecord::from(updated))
  }

  #[instrument(name = "service::delete_product", skip(self))]
  pub async fn delete_product(&self, id: i64) -> Result<()> {
    if !self.repository.exists_by_id(id).await? {
      return Err(AppError::NotFound(format!("Product not found with id: {}", id)));
    }
    self.repository.delete_by_id(id).await?;
    Ok(())
  }

  /// A blank or absent term behaves exactly like [`Self::get_all_products`],
  /// ordering included. Otherwise the trimmed term is matched
  /// case-insensitively as a substring of name or description.
  #[instrument(name = "service::search_products", skip(self))]
  pub async fn search_products(&self, term: Option<&str>) -> Result<Vec<ProductRecord>> {
    let term = term.map(str::trim).unwrap_or("");
    if term.is_empty() {
      return self.get_all_products().await;
    }

    let products = self.repository.search_by_name_or_description(term).await?;
    Ok(products.into_iter().map(ProductRecord::from).collect())
  }

  /// Case-insensitive substring match on the category label.
  #[instrument(name = "service::get_products_by_category", skip(self))]
  pub async fn get_products_by_category(&self, category: &str) -> Result<Vec<ProductRecord>> {
    let products = self.repository.find_by_category_containing(category).await?;
    Ok(products.into_iter().map(ProductRecord::from).collect())
  }

  /// Products whose quantity is at or below the threshold.
  #[instrument(name = "service::get_low_stock_products", skip(self))]
  pub async fn get_low_stock_products(&self, threshold: i32) -> Result<Vec<ProductRecord>> {
    let products = self.repository.find_by_quantity_at_most(threshold).await?;
    Ok(products.into_iter().map(ProductRecord::from).collect())
  }
}
