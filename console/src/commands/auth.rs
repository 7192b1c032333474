//! Sign-in and session commands
use serde::Serialize;

use folio_core::{AuthState, GateDecision};

use super::CommandResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    /// "pending", "signedIn" or "signedOut"
    pub status: String,
    pub email: Option<String>,
}

impl From<AuthState> for SessionInfo {
    fn from(state: AuthState) -> Self {
        match state {
            AuthState::Pending => Self {
                status: "pending".to_string(),
                email: None,
            },
            AuthState::SignedIn(identity) => Self {
                status: "signedIn".to_string(),
                email: Some(identity.email),
            },
            AuthState::SignedOut => Self {
                status: "signedOut".to_string(),
                email: None,
            },
        }
    }
}

pub fn sign_in(state: &AppState, email: String, password: String) -> CommandResult<SessionInfo> {
    match state.with_portfolio(|site| site.sign_in(&email, &password)) {
        Ok(_) => match state.with_portfolio(|site| Ok(site.gate().state())) {
            Ok(auth_state) => CommandResult::ok(auth_state.into()),
            Err(e) => CommandResult::err(e.to_string()),
        },
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn sign_out(state: &AppState) -> CommandResult<()> {
    match state.with_portfolio(|site| {
        site.sign_out();
        Ok(())
    }) {
        Ok(()) => CommandResult::ok(()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn session_state(state: &AppState) -> CommandResult<SessionInfo> {
    match state.with_portfolio(|site| Ok(site.gate().state())) {
        Ok(auth_state) => CommandResult::ok(auth_state.into()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

/// Whether a protected admin page may render right now.
pub fn check_access(state: &AppState) -> CommandResult<String> {
    match state.with_portfolio(|site| Ok(site.gate().check())) {
        Ok(decision) => CommandResult::ok(
            match decision {
                GateDecision::Loading => "loading",
                GateDecision::Allow => "allow",
                GateDecision::RedirectToLogin => "redirectToLogin",
            }
            .to_string(),
        ),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::tests::test_state;

    #[test]
    fn test_sign_in_flow() {
        let state = test_state();
        assert_eq!(check_access(&state).data.unwrap(), "redirectToLogin");

        let bad = sign_in(&state, "admin@example.com".to_string(), "wrong".to_string());
        assert!(!bad.success);

        let good = sign_in(
            &state,
            "admin@example.com".to_string(),
            "hunter2".to_string(),
        );
        assert!(good.success);
        assert_eq!(good.data.unwrap().status, "signedIn");
        assert_eq!(check_access(&state).data.unwrap(), "allow");

        sign_out(&state);
        assert_eq!(session_state(&state).data.unwrap().status, "signedOut");
    }
}
