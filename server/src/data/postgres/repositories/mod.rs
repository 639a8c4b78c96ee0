//! Repository functions over the PostgreSQL pool

pub mod category;
pub mod customer;
pub mod filter;
pub mod product;
