//! Repository-level error types.

use thiserror::Error;

/// Failures surfaced by a post repository.
///
/// `NotFound` and `Constraint` are caller-inspectable outcomes (missing slug,
/// slug uniqueness violation); `Connection` and `Query` carry store faults
/// upward unchanged. The repository never retries.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
