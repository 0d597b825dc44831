//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//! This crate contains the database integrations.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL database support via SeaORM

pub mod database;

// Re-exports - In-Memory
pub use database::InMemoryPostRepository;

#[cfg(feature = "postgres")]
pub use database::{PostgresPostRepository, Store};
