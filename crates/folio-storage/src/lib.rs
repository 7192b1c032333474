//! Folio Storage Layer
//!
//! SQLite-based persistence exposed as a small document store:
//! named collections of JSON documents with an optional display order
//! and store-assigned timestamps. All multi-document writes are
//! transactional.

mod database;
mod document;
mod error;
mod migrations;

pub use database::Database;
pub use document::{Document, DocumentStore};
pub use error::StorageError;

pub type Result<T> = std::result::Result<T, StorageError>;
