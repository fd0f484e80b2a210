//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Store-level errors.
///
/// `NotFound` is an expected outcome (the id has no post) and must never be
/// conflated with `Connection`/`Query`, which mean the backend itself failed.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Post not found")]
    NotFound,

    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),
}
