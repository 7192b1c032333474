//! Contact messages submitted from the public site

use serde::{Deserialize, Serialize};

use crate::collection::Collection;
use crate::error::ContentError;
use crate::record::ContentRecord;
use crate::records::is_blank;
use crate::Result;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContentRecord for ContactMessage {
    const COLLECTION: Collection = Collection::ContactMessages;

    fn validate(&self) -> Result<()> {
        if is_blank(&self.name)
            || is_blank(&self.email)
            || is_blank(&self.subject)
            || is_blank(&self.message)
        {
            return Err(ContentError::Validation(
                "Please fill in all fields.".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fields_required() {
        let message = ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hi".to_string(),
            message: String::new(),
        };
        assert!(message.validate().is_err());

        let message = ContactMessage {
            message: "Hello there".to_string(),
            ..message
        };
        assert!(message.validate().is_ok());
    }
}
