//! Typed records, one per collection
//!
//! Field names serialize in camelCase to match the site's document
//! format. Every field defaults so legacy documents with missing keys
//! still load.

mod achievement;
mod blog;
mod contact;
mod education;
mod experience;
mod finance;
mod gallery;
mod profile;
mod project;
mod skill;

pub use achievement::Achievement;
pub use blog::BlogPost;
pub use contact::ContactMessage;
pub use education::Education;
pub use experience::Experience;
pub use finance::{FinanceKind, FinancePlan, FinanceRecord};
pub use gallery::GalleryItem;
pub use profile::AboutMe;
pub use project::Project;
pub use skill::Skill;

/// True when a string is empty after trimming.
pub(crate) fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
