//! Tab error types

use thiserror::Error;

use crate::field::FieldId;

#[derive(Error, Debug)]
pub enum TabError {
    #[error("Invalid tab definition: {0}")]
    InvalidDefinition(String),

    #[error("Field ids must be strictly increasing: {id} follows {previous}")]
    NonIncreasingId { previous: FieldId, id: FieldId },

    #[error("Storage error: {0}")]
    Storage(#[from] formtab_storage::StorageError),
}
