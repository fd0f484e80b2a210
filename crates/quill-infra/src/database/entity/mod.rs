//! SeaORM entities for the Postgres backend.

pub mod post;
