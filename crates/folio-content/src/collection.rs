//! Collection names
//!
//! Each content type lives in its own named bucket in the store. The
//! string forms match the document collection names used by the site.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collection {
    Achievements,
    Projects,
    Skills,
    Experiences,
    Educations,
    Gallery,
    BlogPosts,
    ContactMessages,
    FinanceRecords,
    FinancePlanning,
    AboutMe,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Achievements => "achievements",
            Collection::Projects => "projects",
            Collection::Skills => "skills",
            Collection::Experiences => "experiences",
            Collection::Educations => "educations",
            Collection::Gallery => "gallery",
            Collection::BlogPosts => "blogPosts",
            Collection::ContactMessages => "contactMessages",
            Collection::FinanceRecords => "financeRecords",
            Collection::FinancePlanning => "financePlanning",
            Collection::AboutMe => "aboutMe",
        }
    }

    /// Collections whose display sequence is an explicit order field,
    /// edited by drag and drop.
    pub fn is_ordered(&self) -> bool {
        matches!(
            self,
            Collection::Achievements
                | Collection::Projects
                | Collection::Skills
                | Collection::Experiences
                | Collection::Educations
                | Collection::Gallery
        )
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Collection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "achievements" => Ok(Collection::Achievements),
            "projects" => Ok(Collection::Projects),
            "skills" => Ok(Collection::Skills),
            "experiences" => Ok(Collection::Experiences),
            "educations" => Ok(Collection::Educations),
            "gallery" => Ok(Collection::Gallery),
            "blogPosts" => Ok(Collection::BlogPosts),
            "contactMessages" => Ok(Collection::ContactMessages),
            "financeRecords" => Ok(Collection::FinanceRecords),
            "financePlanning" => Ok(Collection::FinancePlanning),
            "aboutMe" => Ok(Collection::AboutMe),
            _ => Err(format!("Unknown collection: {}", s)),
        }
    }
}
