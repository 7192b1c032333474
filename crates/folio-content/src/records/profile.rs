//! The single "about me" profile document

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::collection::Collection;
use crate::error::ContentError;
use crate::record::ContentRecord;
use crate::records::is_blank;
use crate::Result;

/// Singleton profile; lives under the fixed key "main".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutMe {
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub description: String,
    pub resume_url: String,
    pub image_url: String,
    /// Platform name -> profile URL
    pub social_links: BTreeMap<String, String>,
}

impl AboutMe {
    pub const KEY: &'static str = "main";

    pub fn full_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        full.trim().to_string()
    }
}

impl ContentRecord for AboutMe {
    const COLLECTION: Collection = Collection::AboutMe;

    fn validate(&self) -> Result<()> {
        let any_filled = !is_blank(&self.first_name)
            || !is_blank(&self.last_name)
            || !is_blank(&self.position)
            || !is_blank(&self.description)
            || !is_blank(&self.resume_url)
            || !is_blank(&self.image_url)
            || !self.social_links.is_empty();

        if !any_filled {
            return Err(ContentError::Validation(
                "Please fill at least one field before saving.".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_one_field() {
        assert!(AboutMe::default().validate().is_err());

        let profile = AboutMe {
            position: "Software Engineer".to_string(),
            ..Default::default()
        };
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_full_name() {
        let profile = AboutMe {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            ..Default::default()
        };
        assert_eq!(profile.full_name(), "Ada Lovelace");

        let profile = AboutMe {
            first_name: "Ada".to_string(),
            ..Default::default()
        };
        assert_eq!(profile.full_name(), "Ada");
    }
}
