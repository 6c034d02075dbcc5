//! Database layer - connection pool, request sessions, and the item repository
//!
//! # Design Principles
//!
//! - Bounded connection pool with a pre-flight liveness check
//! - One transactional session per request; drop without commit rolls back
//! - Explicit SQL statements, no reflection

pub mod migrations;
pub mod pool;
pub mod repos;
pub mod session;

pub use pool::create_pool;
pub use repos::{Item, ItemRepo};
pub use session::Session;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// The store is unreachable or a statement failed.
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// The referenced row does not exist.
    #[error("not found: {resource} {id}")]
    NotFound { resource: &'static str, id: i32 },
}
