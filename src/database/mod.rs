//! Database module exports.

#[cfg(test)]
pub mod memory;
pub mod models;
mod mongo;
mod repository;
mod store;

pub use models::*;
pub use mongo::Database;
pub use repository::CatalogRepository;
pub use store::CatalogStore;
