//! Achievement records: awards, certificates, notable results

use serde::{Deserialize, Serialize};

use crate::collection::Collection;
use crate::error::ContentError;
use crate::record::ContentRecord;
use crate::records::is_blank;
use crate::Result;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Achievement {
    pub title: String,
    pub date: String,
    pub issuer: String,
    pub category: String,
    pub description: String,
    pub image_url: String,
    pub link_url: String,
    pub download_url: String,
}

impl ContentRecord for Achievement {
    const COLLECTION: Collection = Collection::Achievements;

    fn validate(&self) -> Result<()> {
        if is_blank(&self.title) {
            return Err(ContentError::Validation("Title is required".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_required() {
        let achievement = Achievement {
            description: "won a thing".to_string(),
            ..Default::default()
        };
        assert!(achievement.validate().is_err());

        let achievement = Achievement {
            title: "Hackathon winner".to_string(),
            ..Default::default()
        };
        assert!(achievement.validate().is_ok());
    }
}
