//! # CMS Infrastructure
//!
//! Concrete implementations of the repository ports defined in `cms-core`:
//! the PostgreSQL persistence gateway and an in-memory store.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL database support via SeaORM
//! - `uuid-ids` - UUID primary keys instead of `BIGINT` ones

pub mod database;

pub use database::{DatabaseConfig, MemoryDatabase};

#[cfg(feature = "postgres")]
pub use database::DatabasePool;
