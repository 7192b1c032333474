//! Record trait and the stored-entry wrapper

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::collection::Collection;
use crate::Result;

/// A content type that can live in a collection.
///
/// Implementors carry only domain fields; ids, order and timestamps are
/// store metadata held on [`Entry`].
pub trait ContentRecord:
    Serialize + DeserializeOwned + Clone + Send + Sync + 'static
{
    const COLLECTION: Collection;

    /// Minimal pre-write validation, mirroring the admin forms.
    /// A failing record must never reach the store.
    fn validate(&self) -> Result<()>;
}

/// One stored record plus its metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Entry<R> {
    /// Store-assigned opaque identifier, immutable
    pub id: String,
    /// Zero-based display position within the collection
    pub order: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub record: R,
}
