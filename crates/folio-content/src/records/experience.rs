//! Work experience records

use serde::{Deserialize, Serialize};

use crate::collection::Collection;
use crate::error::ContentError;
use crate::record::ContentRecord;
use crate::records::is_blank;
use crate::Result;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub start_date: String,
    /// Empty while the position is current
    pub end_date: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub logo_url: String,
}

impl ContentRecord for Experience {
    const COLLECTION: Collection = Collection::Experiences;

    fn validate(&self) -> Result<()> {
        if is_blank(&self.company) && is_blank(&self.role) {
            return Err(ContentError::Validation(
                "Please provide at least a company or a role.".to_string(),
            ));
        }
        Ok(())
    }
}
