//! API route handlers

pub mod categories;
pub mod customers;
pub mod filters;
pub mod health;
pub mod products;
