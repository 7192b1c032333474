//! Generic document access
//!
//! Collections are named buckets of JSON documents. The store assigns
//! ids and timestamps; callers only ever hand it domain fields.

use chrono::{DateTime, Utc};
use rusqlite::{OptionalExtension, Row};
use serde::Serialize;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::database::Database;
use crate::error::StorageError;
use crate::Result;

#[derive(Debug, Clone, Serialize)]
pub struct Document {
    /// Store-assigned identifier, unique within its collection
    pub id: String,
    /// Domain fields, always a JSON object
    pub data: Value,
    /// Display order; None for rows written before ordering existed
    pub ord: Option<i64>,
    /// Set once at insert
    pub created_at: DateTime<Utc>,
    /// Bumped on every write
    pub updated_at: DateTime<Utc>,
}

fn parse_timestamp(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

fn row_to_document(row: &Row) -> rusqlite::Result<Document> {
    let data_str: String = row.get(1)?;
    let data: Value =
        serde_json::from_str(&data_str).unwrap_or_else(|_| Value::Object(Map::new()));

    let created_str: String = row.get(3)?;
    let updated_str: String = row.get(4)?;

    Ok(Document {
        id: row.get(0)?,
        data,
        ord: row.get(2)?,
        created_at: parse_timestamp(&created_str),
        updated_at: parse_timestamp(&updated_str),
    })
}

pub struct DocumentStore {
    db: Database,
}

impl DocumentStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// All documents in a collection, ascending by order.
    /// Rows without an order sort after ordered ones.
    pub fn list_sorted(&self, collection: &str) -> Result<Vec<Document>> {
        self.db.with_connection(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, data, ord, created_at, updated_at
                 FROM documents WHERE collection = ?1
                 ORDER BY ord IS NULL, ord ASC, created_at ASC",
            )?;

            let docs: Vec<Document> = stmt
                .query_map([collection], row_to_document)?
                .filter_map(|r| r.ok())
                .collect();

            Ok(docs)
        })
    }

    /// Newest-first feed, for collections sequenced by creation time
    /// rather than an explicit order (messages, blog posts, finance).
    pub fn list_by_created_desc(&self, collection: &str) -> Result<Vec<Document>> {
        self.db.with_connection(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, data, ord, created_at, updated_at
                 FROM documents WHERE collection = ?1
                 ORDER BY created_at DESC",
            )?;

            let docs: Vec<Document> = stmt
                .query_map([collection], row_to_document)?
                .filter_map(|r| r.ok())
                .collect();

            Ok(docs)
        })
    }

    pub fn get(&self, collection: &str, id: &str) -> Result<Option<Document>> {
        self.db.with_connection(|conn| {
            let doc = conn
                .query_row(
                    "SELECT id, data, ord, created_at, updated_at
                     FROM documents WHERE collection = ?1 AND id = ?2",
                    [collection, id],
                    row_to_document,
                )
                .optional()?;
            Ok(doc)
        })
    }

    pub fn count(&self, collection: &str) -> Result<usize> {
        self.db.with_connection(|conn| {
            let count: i64 = conn.query_row(
                "SELECT COUNT(*) FROM documents WHERE collection = ?1",
                [collection],
                |row| row.get(0),
            )?;
            Ok(count as usize)
        })
    }

    /// Create a document with a fresh id and store-assigned timestamps.
    pub fn insert(&self, collection: &str, data: &Value, ord: Option<i64>) -> Result<Document> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now();
        let serialized = serde_json::to_string(data)?;

        self.db.with_connection(|conn| {
            conn.execute(
                "INSERT INTO documents (collection, id, data, ord, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                rusqlite::params![
                    collection,
                    id,
                    serialized,
                    ord,
                    now.to_rfc3339(),
                    now.to_rfc3339(),
                ],
            )?;
            Ok(())
        })?;

        tracing::debug!(collection = %collection, id = %id, "Inserted document");

        Ok(Document {
            id,
            data: data.clone(),
            ord,
            created_at: now,
            updated_at: now,
        })
    }

    /// Upsert under a caller-chosen key. Used for singleton documents
    /// (e.g. the "main" profile).
    pub fn put(&self, collection: &str, id: &str, data: &Value, ord: Option<i64>) -> Result<()> {
        let now = Utc::now();
        let serialized = serde_json::to_string(data)?;

        self.db.with_connection(|conn| {
            conn.execute(
                "INSERT INTO documents (collection, id, data, ord, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                 ON CONFLICT (collection, id) DO UPDATE
                 SET data = excluded.data, ord = excluded.ord, updated_at = excluded.updated_at",
                rusqlite::params![
                    collection,
                    id,
                    serialized,
                    ord,
                    now.to_rfc3339(),
                    now.to_rfc3339(),
                ],
            )?;
            Ok(())
        })
    }

    /// Merge a set of fields into a document's data, leaving every other
    /// field (and the order) untouched. Last write wins per field.
    pub fn merge_fields(
        &self,
        collection: &str,
        id: &str,
        patch: &Map<String, Value>,
    ) -> Result<Document> {
        let now = Utc::now();

        self.db.transaction(|conn| {
            let doc = conn
                .query_row(
                    "SELECT id, data, ord, created_at, updated_at
                     FROM documents WHERE collection = ?1 AND id = ?2",
                    [collection, id],
                    row_to_document,
                )
                .optional()?
                .ok_or_else(|| StorageError::NotFound {
                    collection: collection.to_string(),
                    id: id.to_string(),
                })?;

            let mut merged = match doc.data {
                Value::Object(map) => map,
                _ => {
                    return Err(StorageError::NotAnObject {
                        collection: collection.to_string(),
                        id: id.to_string(),
                    })
                }
            };
            for (key, value) in patch {
                merged.insert(key.clone(), value.clone());
            }

            let serialized = serde_json::to_string(&Value::Object(merged.clone()))?;
            conn.execute(
                "UPDATE documents SET data = ?1, updated_at = ?2
                 WHERE collection = ?3 AND id = ?4",
                rusqlite::params![serialized, now.to_rfc3339(), collection, id],
            )?;

            Ok(Document {
                id: doc.id,
                data: Value::Object(merged),
                ord: doc.ord,
                created_at: doc.created_at,
                updated_at: now,
            })
        })
    }

    /// Rewrite the order of every listed document in one transaction.
    /// Either all positions land or none do.
    pub fn reorder_batch(&self, collection: &str, orders: &[(String, i64)]) -> Result<()> {
        let now = Utc::now();

        self.db.transaction(|conn| {
            for (id, ord) in orders {
                let changed = conn.execute(
                    "UPDATE documents SET ord = ?1, updated_at = ?2
                     WHERE collection = ?3 AND id = ?4",
                    rusqlite::params![ord, now.to_rfc3339(), collection, id],
                )?;
                if changed == 0 {
                    return Err(StorageError::NotFound {
                        collection: collection.to_string(),
                        id: id.clone(),
                    });
                }
            }
            Ok(())
        })?;

        tracing::debug!(
            collection = %collection,
            count = orders.len(),
            "Persisted collection order"
        );

        Ok(())
    }

    pub fn delete(&self, collection: &str, id: &str) -> Result<()> {
        self.db.with_connection(|conn| {
            conn.execute(
                "DELETE FROM documents WHERE collection = ?1 AND id = ?2",
                [collection, id],
            )?;
            Ok(())
        })?;

        tracing::debug!(collection = %collection, id = %id, "Deleted document");

        Ok(())
    }
}

impl Clone for DocumentStore {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
        }
    }
}
