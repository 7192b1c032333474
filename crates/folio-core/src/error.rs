//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] folio_storage::StorageError),

    #[error("Content error: {0}")]
    Content(#[from] folio_content::ContentError),

    #[error("Auth error: {0}")]
    Auth(#[from] folio_auth::AuthError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Portfolio not initialized")]
    NotInitialized,
}

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::Config(e.to_string())
    }
}
