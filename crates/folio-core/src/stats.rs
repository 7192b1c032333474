//! Dashboard and finance aggregates

use serde::Serialize;
use std::collections::BTreeMap;

use folio_content::{Entry, FinanceKind, FinancePlan, FinanceRecord};

/// Per-collection record counts shown on the admin dashboard.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub achievements: usize,
    pub projects: usize,
    pub skills: usize,
    pub experiences: usize,
    pub educations: usize,
    pub gallery: usize,
    pub blog_posts: usize,
    pub contact_messages: usize,
}

/// Totals derived from the finance ledger and purchase plans.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceSummary {
    pub income_total: f64,
    pub spending_total: f64,
    pub balance: f64,
    pub planned_total: f64,
    pub spending_by_category: BTreeMap<String, f64>,
}

impl FinanceSummary {
    pub fn from_records(
        records: &[Entry<FinanceRecord>],
        plans: &[Entry<FinancePlan>],
    ) -> Self {
        let mut summary = FinanceSummary::default();

        for entry in records {
            match entry.record.kind {
                FinanceKind::Income => summary.income_total += entry.record.amount,
                FinanceKind::Spending => {
                    summary.spending_total += entry.record.amount;

                    let category = if entry.record.category.trim().is_empty() {
                        "uncategorized".to_string()
                    } else {
                        entry.record.category.clone()
                    };
                    *summary.spending_by_category.entry(category).or_insert(0.0) +=
                        entry.record.amount;
                }
            }
        }

        summary.balance = summary.income_total - summary.spending_total;
        summary.planned_total = plans.iter().map(|p| p.record.amount).sum();

        summary
    }
}
