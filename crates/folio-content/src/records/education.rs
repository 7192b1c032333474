//! Education records

use serde::{Deserialize, Serialize};

use crate::collection::Collection;
use crate::error::ContentError;
use crate::record::ContentRecord;
use crate::records::is_blank;
use crate::Result;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub school: String,
    pub degree: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

impl ContentRecord for Education {
    const COLLECTION: Collection = Collection::Educations;

    fn validate(&self) -> Result<()> {
        if is_blank(&self.school) && is_blank(&self.degree) {
            return Err(ContentError::Validation(
                "Please provide at least a school or a degree.".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_school_or_degree() {
        assert!(Education::default().validate().is_err());

        let education = Education {
            school: "IDG".to_string(),
            ..Default::default()
        };
        assert!(education.validate().is_ok());
    }
}
