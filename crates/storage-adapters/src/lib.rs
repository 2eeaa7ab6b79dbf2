//! # storage-adapters
//!
//! Persistence adapters for the repository ports in `domains`.

#[cfg(feature = "db-sqlite")]
pub mod sqlite;

#[cfg(feature = "db-sqlite")]
pub use sqlite::SqliteContentStore;
