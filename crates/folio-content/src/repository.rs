//! Repository seam over the document store
//!
//! Components never talk to the store directly; they hold a
//! [`RecordStore`] so the persistence backend can be swapped without
//! touching editor or view logic.

use serde_json::{Map, Value};
use std::marker::PhantomData;

use folio_storage::{Document, DocumentStore};

use crate::error::ContentError;
use crate::record::{ContentRecord, Entry};
use crate::Result;

/// Persistence operations for one collection of records.
pub trait RecordStore<R: ContentRecord>: Send + Sync {
    /// All entries, ascending by persisted order. Entries without an
    /// order get their fetched position as a fallback.
    fn load(&self) -> Result<Vec<Entry<R>>>;

    fn insert(&self, record: &R, order: Option<usize>) -> Result<Entry<R>>;

    /// Replace the record's domain fields, leaving order untouched.
    fn update(&self, id: &str, record: &R) -> Result<Entry<R>>;

    /// Single-field write, no validation.
    fn set_field(&self, id: &str, field: &str, value: Value) -> Result<()>;

    /// Persist new positions for every listed entry, atomically.
    fn set_orders(&self, orders: &[(String, usize)]) -> Result<()>;

    fn delete(&self, id: &str) -> Result<()>;
}

/// Document-store-backed repository for one record type.
pub struct Repository<R> {
    store: DocumentStore,
    _record: PhantomData<R>,
}

impl<R: ContentRecord> Repository<R> {
    pub fn new(store: DocumentStore) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    fn collection() -> &'static str {
        R::COLLECTION.as_str()
    }

    fn to_entry(doc: Document, fallback_order: usize) -> Option<Entry<R>> {
        let order = doc
            .ord
            .and_then(|o| usize::try_from(o).ok())
            .unwrap_or(fallback_order);

        match serde_json::from_value::<R>(doc.data) {
            Ok(record) => Some(Entry {
                id: doc.id,
                order,
                created_at: doc.created_at,
                updated_at: doc.updated_at,
                record,
            }),
            Err(e) => {
                tracing::warn!(
                    collection = %Self::collection(),
                    id = %doc.id,
                    error = %e,
                    "Skipping malformed document"
                );
                None
            }
        }
    }

    fn record_fields(record: &R) -> Result<Map<String, Value>> {
        match serde_json::to_value(record)? {
            Value::Object(map) => Ok(map),
            _ => Err(ContentError::Validation(
                "Record must serialize to an object".to_string(),
            )),
        }
    }

    /// Newest-first feed, for collections sequenced by creation time.
    pub fn load_recent(&self) -> Result<Vec<Entry<R>>> {
        let docs = self.store.list_by_created_desc(Self::collection())?;
        Ok(docs
            .into_iter()
            .enumerate()
            .filter_map(|(i, doc)| Self::to_entry(doc, i))
            .collect())
    }

    pub fn get(&self, id: &str) -> Result<Option<Entry<R>>> {
        let doc = self.store.get(Self::collection(), id)?;
        Ok(doc.and_then(|d| Self::to_entry(d, 0)))
    }

    pub fn count(&self) -> Result<usize> {
        Ok(self.store.count(Self::collection())?)
    }

    /// Read a record stored under a fixed key (singleton documents).
    pub fn get_keyed(&self, key: &str) -> Result<Option<R>> {
        let doc = self.store.get(Self::collection(), key)?;
        Ok(doc.and_then(|d| Self::to_entry(d, 0)).map(|e| e.record))
    }

    /// Upsert a record under a fixed key.
    pub fn put_keyed(&self, key: &str, record: &R) -> Result<()> {
        let fields = Self::record_fields(record)?;
        self.store
            .put(Self::collection(), key, &Value::Object(fields), None)?;
        Ok(())
    }
}

impl<R: ContentRecord> RecordStore<R> for Repository<R> {
    fn load(&self) -> Result<Vec<Entry<R>>> {
        let docs = self.store.list_sorted(Self::collection())?;
        Ok(docs
            .into_iter()
            .enumerate()
            .filter_map(|(i, doc)| Self::to_entry(doc, i))
            .collect())
    }

    fn insert(&self, record: &R, order: Option<usize>) -> Result<Entry<R>> {
        let fields = Self::record_fields(record)?;
        let doc = self.store.insert(
            Self::collection(),
            &Value::Object(fields),
            order.map(|o| o as i64),
        )?;

        Ok(Entry {
            id: doc.id,
            order: order.unwrap_or(0),
            created_at: doc.created_at,
            updated_at: doc.updated_at,
            record: record.clone(),
        })
    }

    fn update(&self, id: &str, record: &R) -> Result<Entry<R>> {
        let fields = Self::record_fields(record)?;
        let doc = self.store.merge_fields(Self::collection(), id, &fields)?;

        let order = doc
            .ord
            .and_then(|o| usize::try_from(o).ok())
            .unwrap_or_default();

        Ok(Entry {
            id: doc.id,
            order,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
            record: record.clone(),
        })
    }

    fn set_field(&self, id: &str, field: &str, value: Value) -> Result<()> {
        let mut patch = Map::new();
        patch.insert(field.to_string(), value);
        self.store.merge_fields(Self::collection(), id, &patch)?;
        Ok(())
    }

    fn set_orders(&self, orders: &[(String, usize)]) -> Result<()> {
        let orders: Vec<(String, i64)> = orders
            .iter()
            .map(|(id, order)| (id.clone(), *order as i64))
            .collect();
        self.store.reorder_batch(Self::collection(), &orders)?;
        Ok(())
    }

    fn delete(&self, id: &str) -> Result<()> {
        self.store.delete(Self::collection(), id)?;
        Ok(())
    }
}

impl<R> Clone for Repository<R> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _record: PhantomData,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Skill;
    use folio_storage::Database;

    fn repository() -> Repository<Skill> {
        let db = Database::open_in_memory().unwrap();
        Repository::new(DocumentStore::new(db))
    }

    #[test]
    fn test_insert_and_load() {
        let repo = repository();

        let rust = Skill {
            name: "Rust".to_string(),
            level: 90,
            ..Default::default()
        };
        let sql = Skill {
            name: "SQL".to_string(),
            ..Default::default()
        };

        repo.insert(&rust, Some(0)).unwrap();
        repo.insert(&sql, Some(1)).unwrap();

        let entries = repo.load().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].record.name, "Rust");
        assert_eq!(entries[0].order, 0);
        assert_eq!(entries[1].record.name, "SQL");
        assert_eq!(entries[1].order, 1);
    }

    #[test]
    fn test_update_preserves_order_and_timestamps() {
        let repo = repository();

        let entry = repo
            .insert(
                &Skill {
                    name: "Rust".to_string(),
                    ..Default::default()
                },
                Some(3),
            )
            .unwrap();

        let updated = repo
            .update(
                &entry.id,
                &Skill {
                    name: "Rust".to_string(),
                    level: 95,
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.order, 3);
        assert_eq!(updated.created_at, entry.created_at);
        assert!(updated.updated_at >= entry.updated_at);
        assert_eq!(updated.record.level, 95);
    }

    #[test]
    fn test_set_field_accepts_empty_string() {
        let repo = repository();
        let entry = repo
            .insert(
                &Skill {
                    name: "Rust".to_string(),
                    ..Default::default()
                },
                Some(0),
            )
            .unwrap();

        repo.set_field(&entry.id, "name", Value::String(String::new()))
            .unwrap();

        let loaded = repo.get(&entry.id).unwrap().unwrap();
        assert_eq!(loaded.record.name, "");
    }

    #[test]
    fn test_keyed_round_trip() {
        let repo = repository();
        assert!(repo.get_keyed("main").unwrap().is_none());

        let skill = Skill {
            name: "Rust".to_string(),
            ..Default::default()
        };
        repo.put_keyed("main", &skill).unwrap();

        let loaded = repo.get_keyed("main").unwrap().unwrap();
        assert_eq!(loaded.name, "Rust");
    }
}
