// src/lib.rs

//! Inventory management REST API.
//!
//! Three layers, composed top-down per request: actix-web handlers translate
//! HTTP to service calls, `ProductService` enforces the business rules
//! (case-insensitive name uniqueness, existence checks, search semantics),
//! and `ProductRepository` exposes the query primitives over PostgreSQL.

pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod repositories;
pub mod services;
pub mod state;
pub mod web;
