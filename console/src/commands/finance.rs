//! Finance ledger commands (admin-only area)
use folio_core::{FinancePlan, FinanceRecord, FinanceSummary};

use super::{CommandResult, EntryInfo};
use crate::state::AppState;

pub fn get_records(state: &AppState) -> CommandResult<Vec<EntryInfo<FinanceRecord>>> {
    match state.with_portfolio(|site| site.finance_records()) {
        Ok(records) => CommandResult::ok(records.into_iter().map(EntryInfo::from).collect()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn add_record(
    state: &AppState,
    record: FinanceRecord,
) -> CommandResult<EntryInfo<FinanceRecord>> {
    match state.with_portfolio(|site| site.add_finance_record(record)) {
        Ok(entry) => CommandResult::ok(entry.into()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn delete_record(state: &AppState, id: String, confirmed: bool) -> CommandResult<bool> {
    match state.with_portfolio(|site| site.delete_finance_record(&id, confirmed)) {
        Ok(deleted) => CommandResult::ok(deleted),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn get_plans(state: &AppState) -> CommandResult<Vec<EntryInfo<FinancePlan>>> {
    match state.with_portfolio(|site| site.finance_plans()) {
        Ok(plans) => CommandResult::ok(plans.into_iter().map(EntryInfo::from).collect()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn add_plan(state: &AppState, plan: FinancePlan) -> CommandResult<EntryInfo<FinancePlan>> {
    match state.with_portfolio(|site| site.add_finance_plan(plan)) {
        Ok(entry) => CommandResult::ok(entry.into()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn delete_plan(state: &AppState, id: String, confirmed: bool) -> CommandResult<bool> {
    match state.with_portfolio(|site| site.delete_finance_plan(&id, confirmed)) {
        Ok(deleted) => CommandResult::ok(deleted),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn get_summary(state: &AppState) -> CommandResult<FinanceSummary> {
    match state.with_portfolio(|site| site.finance_summary()) {
        Ok(summary) => CommandResult::ok(summary),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::tests::test_state;
    use folio_core::FinanceKind;

    #[test]
    fn test_ledger_and_summary() {
        let state = test_state();

        add_record(
            &state,
            FinanceRecord {
                kind: FinanceKind::Income,
                amount: 500.0,
                ..Default::default()
            },
        );
        add_record(
            &state,
            FinanceRecord {
                kind: FinanceKind::Spending,
                amount: 125.0,
                category: "travel".to_string(),
                ..Default::default()
            },
        );

        let summary = get_summary(&state).data.unwrap();
        assert_eq!(summary.balance, 375.0);
        assert_eq!(summary.spending_by_category["travel"], 125.0);
    }

    #[test]
    fn test_invalid_amount_rejected() {
        let state = test_state();

        let result = add_record(
            &state,
            FinanceRecord {
                amount: -5.0,
                ..Default::default()
            },
        );
        assert!(!result.success);
        assert!(get_records(&state).data.unwrap().is_empty());
    }
}
