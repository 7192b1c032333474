//! Project records

use serde::{Deserialize, Serialize};

use crate::collection::Collection;
use crate::error::ContentError;
use crate::record::ContentRecord;
use crate::records::is_blank;
use crate::Result;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub title: String,
    pub description: String,
    /// Live deployment link
    pub url: String,
    pub github_url: String,
    /// Tech/languages used, in display order
    pub technologies: Vec<String>,
    pub image_url: String,
    pub is_featured: bool,
}

impl ContentRecord for Project {
    const COLLECTION: Collection = Collection::Projects;

    fn validate(&self) -> Result<()> {
        if is_blank(&self.title) || is_blank(&self.description) {
            return Err(ContentError::Validation(
                "Please provide a title and a description for the project.".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_title_and_description() {
        let project = Project {
            title: "Folio".to_string(),
            ..Default::default()
        };
        assert!(project.validate().is_err());

        let project = Project {
            description: "A portfolio".to_string(),
            ..Default::default()
        };
        assert!(project.validate().is_err());

        let project = Project {
            title: "Folio".to_string(),
            description: "A portfolio".to_string(),
            ..Default::default()
        };
        assert!(project.validate().is_ok());
    }
}
