//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL backend via SeaORM. The in-memory
//!   store is always available and needs no features.

pub mod store;

#[cfg(feature = "postgres")]
pub mod database;

pub use store::InMemoryPostStore;

#[cfg(feature = "postgres")]
pub use database::{DatabaseConfig, PostgresPostStore};
