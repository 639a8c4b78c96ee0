//! Storefront catalog server
//!
//! REST API for an e-commerce catalog: products, category-scoped filters
//! with replaceable option sets, categories, and customers, backed by
//! PostgreSQL.

pub mod api;
pub mod app;
pub mod core;
pub mod data;
pub mod utils;
