//! Data storage layer
//!
//! - `postgres` - PostgreSQL service, schema, and entity repositories
//! - `types` - Row types shared between repositories and the API layer

pub mod postgres;
pub mod types;

pub use postgres::{PostgresError, PostgresService};
