//! Personal finance records and purchase plans (admin-only area)

use serde::{Deserialize, Serialize};

use crate::collection::Collection;
use crate::error::ContentError;
use crate::record::ContentRecord;
use crate::records::is_blank;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FinanceKind {
    Income,
    Spending,
}

impl Default for FinanceKind {
    fn default() -> Self {
        FinanceKind::Spending
    }
}

impl FinanceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FinanceKind::Income => "income",
            FinanceKind::Spending => "spending",
        }
    }
}

impl std::fmt::Display for FinanceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for FinanceKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(FinanceKind::Income),
            "spending" => Ok(FinanceKind::Spending),
            _ => Err(format!("Unknown finance kind: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinanceRecord {
    #[serde(rename = "type")]
    pub kind: FinanceKind,
    pub amount: f64,
    pub desc: String,
    pub date: String,
    /// Only meaningful for spending records
    pub category: String,
}

impl ContentRecord for FinanceRecord {
    const COLLECTION: Collection = Collection::FinanceRecords;

    fn validate(&self) -> Result<()> {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(ContentError::Validation("Enter a valid amount.".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinancePlan {
    pub desc: String,
    pub amount: f64,
    pub date: String,
}

impl ContentRecord for FinancePlan {
    const COLLECTION: Collection = Collection::FinancePlanning;

    fn validate(&self) -> Result<()> {
        if is_blank(&self.desc) {
            return Err(ContentError::Validation(
                "Plan description required".to_string(),
            ));
        }
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(ContentError::Validation("Enter a valid amount.".to_string()));
        }
        Ok(())
    }
}
