//! Blog posts
//!
//! Posts are a newest-first feed, not a drag-ordered list. The slug is
//! derived from the title when the author leaves it blank.

use serde::{Deserialize, Serialize};

use crate::collection::Collection;
use crate::error::ContentError;
use crate::record::ContentRecord;
use crate::records::is_blank;
use crate::Result;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogPost {
    pub title: String,
    /// URL-safe identifier; generated from the title when blank
    pub slug: String,
    pub category: String,
    pub author: String,
    pub content: String,
    pub tags: Vec<String>,
    pub published: bool,
    pub cover_image: String,
}

impl BlogPost {
    /// Lowercased, hyphen-separated slug from an arbitrary title.
    pub fn generate_slug(title: &str) -> String {
        let mut slug = String::with_capacity(title.len());
        let mut last_was_hyphen = true;

        for ch in title.chars() {
            if ch.is_alphanumeric() {
                for lower in ch.to_lowercase() {
                    slug.push(lower);
                }
                last_was_hyphen = false;
            } else if !last_was_hyphen {
                slug.push('-');
                last_was_hyphen = true;
            }
        }

        slug.trim_end_matches('-').to_string()
    }

    /// The slug to store: explicit if provided, derived otherwise.
    pub fn effective_slug(&self) -> String {
        if is_blank(&self.slug) {
            Self::generate_slug(&self.title)
        } else {
            self.slug.trim().to_string()
        }
    }
}

impl ContentRecord for BlogPost {
    const COLLECTION: Collection = Collection::BlogPosts;

    fn validate(&self) -> Result<()> {
        if is_blank(&self.title) {
            return Err(ContentError::Validation("Title is required".to_string()));
        }
        if is_blank(&self.content) {
            return Err(ContentError::Validation("Content is required".to_string()));
        }
        Ok(())
    }
}
