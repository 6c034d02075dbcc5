//! itemd-server: HTTP service for item records
//!
//! Owns the connection pool, hands each request one transactional session,
//! and exposes create/list/delete over a single `items` table plus a
//! database health probe.

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, DbError, Item, ItemRepo, Session};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig};
pub use models::{ItemTitle, ValidationError};
