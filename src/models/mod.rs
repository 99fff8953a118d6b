// src/models/mod.rs

//! Data structures for the persisted entity and its wire-facing shapes.

pub mod product;

pub use product::{Product, ProductInput, ProductRecord};
