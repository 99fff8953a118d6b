// src/repositories/mod.rs

//! Persistence layer: declarative query primitives, no business logic.

pub mod product_repository;

pub use product_repository::{PgProductRepository, ProductRepository};
