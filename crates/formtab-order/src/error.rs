//! Order validation error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrderError {
    #[error("Storage error: {0}")]
    Storage(#[from] formtab_storage::StorageError),
}
