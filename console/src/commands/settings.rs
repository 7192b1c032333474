//! Site settings commands
use super::CommandResult;
use crate::state::AppState;

pub fn get_theme(state: &AppState) -> CommandResult<Option<String>> {
    match state.with_portfolio(|site| site.get_theme()) {
        Ok(theme) => CommandResult::ok(theme),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn set_theme(state: &AppState, theme: String) -> CommandResult<()> {
    match state.with_portfolio(|site| site.set_theme(theme)) {
        Ok(()) => CommandResult::ok(()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::tests::test_state;

    #[test]
    fn test_theme_round_trip() {
        let state = test_state();
        assert!(get_theme(&state).data.unwrap().is_none());

        set_theme(&state, "dark".to_string());
        assert_eq!(get_theme(&state).data.unwrap().as_deref(), Some("dark"));
    }
}
