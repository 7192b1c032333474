//! Gallery items

use serde::{Deserialize, Serialize};

use crate::collection::Collection;
use crate::error::ContentError;
use crate::record::ContentRecord;
use crate::records::is_blank;
use crate::Result;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryItem {
    pub title: String,
    pub image_url: String,
    pub description: String,
}

impl ContentRecord for GalleryItem {
    const COLLECTION: Collection = Collection::Gallery;

    fn validate(&self) -> Result<()> {
        if is_blank(&self.title) || is_blank(&self.image_url) {
            return Err(ContentError::Validation(
                "Title and image URL required".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_and_image_required() {
        let item = GalleryItem {
            title: "Sunset".to_string(),
            ..Default::default()
        };
        assert!(item.validate().is_err());

        let item = GalleryItem {
            title: "Sunset".to_string(),
            image_url: "https://example.com/sunset.jpg".to_string(),
            ..Default::default()
        };
        assert!(item.validate().is_ok());
    }
}
