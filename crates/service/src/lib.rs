//! Service layer providing resource-oriented CRUD operations on top of models.
//! - Separates request handling from data access.
//! - Interprets the schema registry in `models` generically for every resource.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod repository;
pub mod membership;
#[cfg(test)]
pub mod test_support;

pub use repository::{Lookup, ResourceRepository, SeaOrmRepository};
