//! Shared utilities

pub mod crypto;
