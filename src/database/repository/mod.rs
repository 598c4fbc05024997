//! Repository module - MongoDB data access.

mod catalog_repository;

pub use catalog_repository::CatalogRepository;
