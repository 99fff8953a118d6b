// src/services/mod.rs

//! Business rules. The only layer with logic: uniqueness enforcement,
//! existence checks, search semantics, and entity/wire-shape mapping.

pub mod product_service;

pub use product_service::ProductService;
