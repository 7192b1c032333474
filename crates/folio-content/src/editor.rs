//! Ordered list editor
//!
//! One editor per drag-reorderable collection. It keeps an in-memory
//! copy of the list, applies drops optimistically, and persists the
//! resulting positions as a single atomic batch. If the batch fails the
//! optimistic reorder is rolled back, so memory and store never drift
//! apart silently.

use parking_lot::RwLock;
use serde_json::Value;
use std::sync::Arc;

use crate::error::ContentError;
use crate::record::{ContentRecord, Entry};
use crate::repository::{RecordStore, Repository};
use crate::Result;

pub struct ListEditor<R: ContentRecord, S: RecordStore<R> = Repository<R>> {
    /// In-memory copy of the collection, in display order
    items: Arc<RwLock<Vec<Entry<R>>>>,
    store: S,
}

impl<R: ContentRecord, S: RecordStore<R>> ListEditor<R, S> {
    pub fn new(store: S) -> Self {
        Self {
            items: Arc::new(RwLock::new(Vec::new())),
            store,
        }
    }

    /// Fetch the collection sorted by persisted order and cache it.
    pub fn load(&self) -> Result<Vec<Entry<R>>> {
        let entries = self.store.load()?;

        tracing::debug!(
            collection = %R::COLLECTION,
            count = entries.len(),
            "Loaded collection"
        );

        *self.items.write() = entries.clone();
        Ok(entries)
    }

    /// Current in-memory list, in display order.
    pub fn items(&self) -> Vec<Entry<R>> {
        self.items.read().clone()
    }

    pub fn get(&self, id: &str) -> Option<Entry<R>> {
        self.items.read().iter().find(|e| e.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Validate and append a new record at the end of the list.
    pub fn create(&self, record: R) -> Result<Entry<R>> {
        record.validate()?;

        let order = self.items.read().len();
        let entry = self.store.insert(&record, Some(order))?;

        self.items.write().push(entry.clone());

        tracing::info!(
            collection = %R::COLLECTION,
            id = %entry.id,
            order = entry.order,
            "Created record"
        );

        Ok(entry)
    }

    /// Validate and replace an existing record's domain fields. The
    /// persisted order is untouched.
    pub fn update(&self, id: &str, record: R) -> Result<Entry<R>> {
        record.validate()?;

        let entry = self.store.update(id, &record)?;

        {
            let mut items = self.items.write();
            if let Some(existing) = items.iter_mut().find(|e| e.id == id) {
                existing.record = entry.record.clone();
                existing.updated_at = entry.updated_at;
            }
        }

        tracing::info!(collection = %R::COLLECTION, id = %id, "Updated record");

        Ok(entry)
    }

    /// Commit a single field immediately, without validation: inline
    /// edits accept any value the record type can hold, including the
    /// empty string. A value the type cannot represent is rejected
    /// before the write; persisting it would make the document
    /// undeserializable and drop it from every subsequent load.
    pub fn set_field(&self, id: &str, field: &str, value: Value) -> Result<()> {
        let patched = {
            let items = self.items.read();
            let existing = items
                .iter()
                .find(|e| e.id == id)
                .ok_or_else(|| ContentError::NotFound(id.to_string()))?;

            let mut fields = match serde_json::to_value(&existing.record)? {
                Value::Object(map) => map,
                _ => {
                    return Err(ContentError::Validation(
                        "Record must serialize to an object".to_string(),
                    ))
                }
            };
            fields.insert(field.to_string(), value.clone());

            serde_json::from_value::<R>(Value::Object(fields)).map_err(|e| {
                ContentError::Validation(format!("Invalid value for {}: {}", field, e))
            })?
        };

        self.store.set_field(id, field, value)?;

        let mut items = self.items.write();
        if let Some(existing) = items.iter_mut().find(|e| e.id == id) {
            existing.record = patched;
        }

        Ok(())
    }

    /// Move the entry at `source` to `destination` and persist every
    /// entry's new position.
    ///
    /// A `None` destination is a cancelled drag: nothing changes in
    /// memory or in the store. The in-memory list is updated before the
    /// write (optimistic); if the batched write fails the list is
    /// rolled back and the error is returned.
    pub fn reorder(&self, source: usize, destination: Option<usize>) -> Result<Vec<Entry<R>>> {
        let Some(destination) = destination else {
            return Ok(self.items());
        };

        let previous = self.items.read().clone();
        if source >= previous.len() {
            return Err(ContentError::IndexOutOfRange(source));
        }

        let mut next = previous.clone();
        let moved = next.remove(source);
        let insert_at = destination.min(next.len());
        next.insert(insert_at, moved);
        for (i, entry) in next.iter_mut().enumerate() {
            entry.order = i;
        }

        // Optimistic: the visible list moves before the write lands
        *self.items.write() = next.clone();

        let orders: Vec<(String, usize)> =
            next.iter().map(|e| (e.id.clone(), e.order)).collect();

        if let Err(e) = self.store.set_orders(&orders) {
            *self.items.write() = previous;
            tracing::warn!(
                collection = %R::COLLECTION,
                error = %e,
                "Failed to persist order, reorder rolled back"
            );
            return Err(e);
        }

        tracing::info!(
            collection = %R::COLLECTION,
            source = source,
            destination = insert_at,
            "Reordered collection"
        );

        Ok(next)
    }

    /// Remove a record. `confirmed` carries the user's answer to the
    /// confirmation dialog; without it no store call is made.
    pub fn delete(&self, id: &str, confirmed: bool) -> Result<bool> {
        if !confirmed {
            tracing::debug!(collection = %R::COLLECTION, id = %id, "Delete not confirmed");
            return Ok(false);
        }

        self.store.delete(id)?;
        self.items.write().retain(|e| e.id != id);

        tracing::info!(collection = %R::COLLECTION, id = %id, "Deleted record");

        Ok(true)
    }
}

impl<R: ContentRecord, S: RecordStore<R> + Clone> Clone for ListEditor<R, S> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
            store: self.store.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{Achievement, Skill};
    use folio_storage::{Database, DocumentStore, StorageError};

    fn achievement(title: &str) -> Achievement {
        Achievement {
            title: title.to_string(),
            ..Default::default()
        }
    }

    fn editor() -> (ListEditor<Achievement>, Repository<Achievement>) {
        let db = Database::open_in_memory().unwrap();
        let repo = Repository::new(DocumentStore::new(db));
        (ListEditor::new(repo.clone()), repo)
    }

    fn seeded() -> (ListEditor<Achievement>, Repository<Achievement>, Vec<String>) {
        let (editor, repo) = editor();
        let mut ids = Vec::new();
        for title in ["A", "B", "C"] {
            ids.push(editor.create(achievement(title)).unwrap().id);
        }
        (editor, repo, ids)
    }

    #[test]
    fn test_load_reflects_persisted_order() {
        let (editor, repo, _) = seeded();

        // Fresh editor over the same store sees the same sequence
        let fresh = ListEditor::new(repo);
        let entries = fresh.load().unwrap();
        let titles: Vec<&str> = entries.iter().map(|e| e.record.title.as_str()).collect();
        assert_eq!(titles, ["A", "B", "C"]);
        assert_eq!(
            entries.iter().map(|e| e.order).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
        drop(editor);
    }

    #[test]
    fn test_legacy_rows_get_position_fallback() {
        let db = Database::open_in_memory().unwrap();
        let store = DocumentStore::new(db);
        store
            .insert(
                "achievements",
                &serde_json::json!({"title": "ordered"}),
                Some(0),
            )
            .unwrap();
        store
            .insert("achievements", &serde_json::json!({"title": "legacy"}), None)
            .unwrap();

        let editor: ListEditor<Achievement> = ListEditor::new(Repository::new(store));
        let entries = editor.load().unwrap();
        assert_eq!(entries[0].record.title, "ordered");
        assert_eq!(entries[1].record.title, "legacy");
        assert_eq!(entries[1].order, 1);
    }

    #[test]
    fn test_reorder_moves_b_to_front() {
        let (editor, repo, ids) = seeded();

        // Drag B (index 1) to index 0
        let entries = editor.reorder(1, Some(0)).unwrap();
        let titles: Vec<&str> = entries.iter().map(|e| e.record.title.as_str()).collect();
        assert_eq!(titles, ["B", "A", "C"]);

        // Persisted: B.order=0, A.order=1, C.order=2
        let stored = repo.load().unwrap();
        assert_eq!(stored[0].id, ids[1]);
        assert_eq!(stored[0].order, 0);
        assert_eq!(stored[1].id, ids[0]);
        assert_eq!(stored[1].order, 1);
        assert_eq!(stored[2].id, ids[2]);
        assert_eq!(stored[2].order, 2);
    }

    #[test]
    fn test_reorder_to_end_clamps_destination() {
        let (editor, _, _) = seeded();

        let entries = editor.reorder(0, Some(99)).unwrap();
        let titles: Vec<&str> = entries.iter().map(|e| e.record.title.as_str()).collect();
        assert_eq!(titles, ["B", "C", "A"]);
        assert_eq!(
            entries.iter().map(|e| e.order).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn test_cancelled_drag_is_a_no_op() {
        let (editor, repo, _) = seeded();

        let entries = editor.reorder(1, None).unwrap();
        let titles: Vec<&str> = entries.iter().map(|e| e.record.title.as_str()).collect();
        assert_eq!(titles, ["A", "B", "C"]);

        let stored = repo.load().unwrap();
        let titles: Vec<&str> = stored.iter().map(|e| e.record.title.as_str()).collect();
        assert_eq!(titles, ["A", "B", "C"]);
    }

    #[test]
    fn test_reorder_bad_source_rejected() {
        let (editor, _, _) = seeded();
        assert!(matches!(
            editor.reorder(7, Some(0)),
            Err(ContentError::IndexOutOfRange(7))
        ));
    }

    #[test]
    fn test_create_assigns_next_order() {
        let (editor, _, _) = seeded();
        let entry = editor.create(achievement("D")).unwrap();
        assert_eq!(entry.order, 3);
        assert_eq!(editor.len(), 4);
    }

    #[test]
    fn test_invalid_record_never_reaches_store() {
        let (editor, repo) = editor();

        let result = editor.create(achievement("   "));
        assert!(matches!(result, Err(ContentError::Validation(_))));
        assert_eq!(repo.count().unwrap(), 0);
        assert!(editor.is_empty());
    }

    #[test]
    fn test_update_leaves_order_untouched() {
        let (editor, repo, ids) = seeded();

        let mut updated = achievement("B updated");
        updated.issuer = "Acme".to_string();
        editor.update(&ids[1], updated).unwrap();

        let stored = repo.load().unwrap();
        assert_eq!(stored[1].record.title, "B updated");
        assert_eq!(stored[1].record.issuer, "Acme");
        assert_eq!(stored[1].order, 1);
    }

    #[test]
    fn test_inline_edit_accepts_empty_value() {
        let (editor, repo, ids) = seeded();

        editor
            .set_field(&ids[0], "title", Value::String(String::new()))
            .unwrap();

        assert_eq!(editor.get(&ids[0]).unwrap().record.title, "");
        let stored = repo.get(&ids[0]).unwrap().unwrap();
        assert_eq!(stored.record.title, "");
    }

    #[test]
    fn test_inline_edit_rejects_unrepresentable_value() {
        let db = Database::open_in_memory().unwrap();
        let repo: Repository<Skill> = Repository::new(DocumentStore::new(db));
        let editor = ListEditor::new(repo.clone());

        let entry = editor
            .create(Skill {
                name: "Rust".to_string(),
                level: 90,
                ..Default::default()
            })
            .unwrap();

        let result = editor.set_field(&entry.id, "level", Value::String("high".to_string()));
        assert!(matches!(result, Err(ContentError::Validation(_))));

        // Nothing was written: a fresh load still sees the document
        let fresh: ListEditor<Skill> = ListEditor::new(repo);
        let entries = fresh.load().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].record.level, 90);
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let (editor, repo, ids) = seeded();

        assert!(!editor.delete(&ids[0], false).unwrap());
        assert_eq!(editor.len(), 3);
        assert_eq!(repo.count().unwrap(), 3);

        assert!(editor.delete(&ids[0], true).unwrap());
        assert_eq!(editor.len(), 2);
        assert_eq!(repo.count().unwrap(), 2);
    }

    // Store stub whose order batch always fails, to observe rollback
    #[derive(Clone)]
    struct FailingOrders(Repository<Achievement>);

    impl RecordStore<Achievement> for FailingOrders {
        fn load(&self) -> Result<Vec<Entry<Achievement>>> {
            self.0.load()
        }
        fn insert(&self, record: &Achievement, order: Option<usize>) -> Result<Entry<Achievement>> {
            self.0.insert(record, order)
        }
        fn update(&self, id: &str, record: &Achievement) -> Result<Entry<Achievement>> {
            self.0.update(id, record)
        }
        fn set_field(&self, id: &str, field: &str, value: Value) -> Result<()> {
            self.0.set_field(id, field, value)
        }
        fn set_orders(&self, _orders: &[(String, usize)]) -> Result<()> {
            Err(ContentError::Storage(StorageError::NotFound {
                collection: "achievements".to_string(),
                id: "unreachable".to_string(),
            }))
        }
        fn delete(&self, id: &str) -> Result<()> {
            self.0.delete(id)
        }
    }

    #[test]
    fn test_failed_reorder_rolls_back_optimistic_update() {
        let db = Database::open_in_memory().unwrap();
        let repo: Repository<Achievement> = Repository::new(DocumentStore::new(db));
        let editor = ListEditor::new(FailingOrders(repo.clone()));

        for title in ["A", "B", "C"] {
            editor.create(achievement(title)).unwrap();
        }

        assert!(editor.reorder(1, Some(0)).is_err());

        // Memory rolled back to match the (unchanged) store
        let titles: Vec<String> = editor
            .items()
            .iter()
            .map(|e| e.record.title.clone())
            .collect();
        assert_eq!(titles, ["A", "B", "C"]);

        let stored = repo.load().unwrap();
        let titles: Vec<&str> = stored.iter().map(|e| e.record.title.as_str()).collect();
        assert_eq!(titles, ["A", "B", "C"]);
    }

    #[test]
    fn test_two_sessions_merge_per_field() {
        // Session 1 reorders; session 2, on a stale copy, edits a field
        // on C. Both must land: order per session 1, field per session 2.
        let (session1, repo, ids) = seeded();

        let session2: ListEditor<Achievement> = ListEditor::new(repo.clone());
        session2.load().unwrap();

        session1.reorder(1, Some(0)).unwrap();
        session2
            .set_field(&ids[2], "issuer", Value::String("Acme".to_string()))
            .unwrap();

        let stored = repo.load().unwrap();
        let titles: Vec<&str> = stored.iter().map(|e| e.record.title.as_str()).collect();
        assert_eq!(titles, ["B", "A", "C"]);
        assert_eq!(stored[2].record.issuer, "Acme");
    }
}
