//! Repository implementations for database access
//!
//! Repositories are the only code that reads or writes their table.
//! They execute against the request's [`Session`](crate::db::Session);
//! the caller commits after a successful mutation.

pub mod items;

pub use items::{Item, ItemRepo};
