//! Folio Core
//!
//! Central coordination layer for the portfolio site: owns the store,
//! the per-collection editors, the auth gate, and the read-only views
//! the public pages render from.

mod config;
mod countdown;
mod error;
mod portfolio;
mod stats;

pub use config::Config;
pub use countdown::{countdown_to, next_birthday, Countdown};
pub use error::CoreError;
pub use portfolio::Portfolio;
pub use stats::{DashboardStats, FinanceSummary};

// Re-export core components
pub use folio_auth::{
    AuthError, AuthGate, AuthState, ConfiguredAdmin, GateDecision, Identity, IdentityProvider,
};
pub use folio_content::{
    AboutMe, Achievement, BlogPost, Collection, ContactMessage, ContentError, ContentRecord,
    Education, Entry, Experience, FinanceKind, FinancePlan, FinanceRecord, GalleryItem, ListEditor,
    Project, RecordStore, Repository, Skill,
};
pub use folio_storage::{Database, DocumentStore, StorageError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
