//! FormTab Storage Layer
//!
//! SQLite-backed field catalog and settings store.
//! The catalog is read by the order validator; settings hold remembered tab selections.

mod database;
mod error;
mod migrations;

pub use database::Database;
pub use error::StorageError;

pub type Result<T> = std::result::Result<T, StorageError>;
