//! Folio Content Management
//!
//! Typed records for every portfolio collection, a repository seam over
//! the document store, and the generic list editor that keeps a
//! drag-reorderable collection synchronized with its persisted order.

mod collection;
mod editor;
mod error;
mod record;
mod records;
mod repository;

pub use collection::Collection;
pub use editor::ListEditor;
pub use error::ContentError;
pub use record::{ContentRecord, Entry};
pub use records::{
    AboutMe, Achievement, BlogPost, ContactMessage, Education, Experience, FinanceKind,
    FinancePlan, FinanceRecord, GalleryItem, Project, Skill,
};
pub use repository::{RecordStore, Repository};

pub type Result<T> = std::result::Result<T, ContentError>;
