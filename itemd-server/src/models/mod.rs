//! Domain models with validation at construction
//!
//! User input is validated when creating these types. Invalid input
//! returns ValidationError, not panic.

pub mod item;
pub mod validation;

pub use item::ItemTitle;
pub use validation::ValidationError;
