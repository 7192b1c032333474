//! Contact inbox commands
use folio_core::ContactMessage;

use super::{CommandResult, EntryInfo};
use crate::state::AppState;

/// Public contact form submission.
pub fn submit_message(
    state: &AppState,
    message: ContactMessage,
) -> CommandResult<EntryInfo<ContactMessage>> {
    match state.with_portfolio(|site| site.submit_message(message)) {
        Ok(entry) => CommandResult::ok(entry.into()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn get_messages(state: &AppState) -> CommandResult<Vec<EntryInfo<ContactMessage>>> {
    match state.with_portfolio(|site| site.contact_messages()) {
        Ok(messages) => CommandResult::ok(messages.into_iter().map(EntryInfo::from).collect()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn delete_message(state: &AppState, id: String, confirmed: bool) -> CommandResult<bool> {
    match state.with_portfolio(|site| site.delete_message(&id, confirmed)) {
        Ok(deleted) => CommandResult::ok(deleted),
        Err(e) => CommandResult::err(e.to_string()),
    }
}
