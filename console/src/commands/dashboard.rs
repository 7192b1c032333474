//! Dashboard commands
use chrono::Utc;

use folio_core::{Countdown, DashboardStats, Project};

use super::{CommandResult, EntryInfo};
use crate::state::AppState;

pub fn get_stats(state: &AppState) -> CommandResult<DashboardStats> {
    match state.with_portfolio(|site| site.dashboard_stats()) {
        Ok(stats) => CommandResult::ok(stats),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn get_featured_projects(state: &AppState) -> CommandResult<Vec<EntryInfo<Project>>> {
    match state.with_portfolio(|site| Ok(site.featured_projects())) {
        Ok(projects) => CommandResult::ok(projects.into_iter().map(EntryInfo::from).collect()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn get_birthday_countdown(state: &AppState) -> CommandResult<Countdown> {
    match state.with_portfolio(|site| site.birthday_countdown(Utc::now())) {
        Ok(countdown) => CommandResult::ok(countdown),
        Err(e) => CommandResult::err(e.to_string()),
    }
}
