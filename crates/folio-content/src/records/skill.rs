//! Skill records

use serde::{Deserialize, Serialize};

use crate::collection::Collection;
use crate::error::ContentError;
use crate::record::ContentRecord;
use crate::records::is_blank;
use crate::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    pub name: String,
    /// Proficiency, 0-100
    pub level: u8,
    pub category: String,
    pub description: String,
}

impl Default for Skill {
    fn default() -> Self {
        Self {
            name: String::new(),
            level: 50,
            category: String::new(),
            description: String::new(),
        }
    }
}

impl ContentRecord for Skill {
    const COLLECTION: Collection = Collection::Skills;

    fn validate(&self) -> Result<()> {
        if is_blank(&self.name) {
            return Err(ContentError::Validation("Skill name required".to_string()));
        }
        if self.level > 100 {
            return Err(ContentError::Validation(
                "Skill level must be between 0 and 100".to_string(),
            ));
        }
        Ok(())
    }
}
