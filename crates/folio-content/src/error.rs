//! Content error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("Index out of range: {0}")]
    IndexOutOfRange(usize),

    #[error("Storage error: {0}")]
    Storage(#[from] folio_storage::StorageError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
