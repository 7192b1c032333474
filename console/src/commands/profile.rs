//! Profile commands
use folio_core::AboutMe;

use super::CommandResult;
use crate::state::AppState;

pub fn get_profile(state: &AppState) -> CommandResult<AboutMe> {
    match state.with_portfolio(|site| site.profile()) {
        Ok(profile) => CommandResult::ok(profile),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn save_profile(state: &AppState, profile: AboutMe) -> CommandResult<()> {
    match state.with_portfolio(|site| site.save_profile(profile)) {
        Ok(()) => CommandResult::ok(()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}
