//! Console commands
//!
//! These commands bridge the admin UI to the Rust core. Every command
//! returns a [`CommandResult`] envelope so the frontend can branch on
//! success without unwinding.

pub mod auth;
pub mod blog;
pub mod contact;
pub mod content;
pub mod dashboard;
pub mod finance;
pub mod profile;
pub mod settings;

use serde::Serialize;

use folio_core::Entry;

#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        tracing::warn!(error = %error, "Command failed");

        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

/// Wire form of a stored record: envelope fields plus the record's own
/// fields, flattened.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryInfo<R> {
    pub id: String,
    pub order: usize,
    pub created_at: String,
    pub updated_at: String,
    #[serde(flatten)]
    pub record: R,
}

impl<R> From<Entry<R>> for EntryInfo<R> {
    fn from(entry: Entry<R>) -> Self {
        Self {
            id: entry.id,
            order: entry.order,
            created_at: entry.created_at.to_rfc3339(),
            updated_at: entry.updated_at.to_rfc3339(),
            record: entry.record,
        }
    }
}
