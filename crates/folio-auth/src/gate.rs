//! Auth gate
//!
//! Wraps admin surfaces: while the identity check is pending the
//! caller renders a loading state; once resolved it either renders the
//! protected view or redirects to login. Listeners are notified on
//! every state change.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::provider::{Identity, IdentityProvider};
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    /// Identity check not yet resolved
    Pending,
    SignedIn(Identity),
    SignedOut,
}

/// What a protected view should do right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Loading,
    Allow,
    RedirectToLogin,
}

type Listener = Box<dyn Fn(&AuthState) + Send + Sync>;

pub struct AuthGate {
    provider: Arc<dyn IdentityProvider>,
    state: Arc<RwLock<AuthState>>,
    listeners: Arc<RwLock<Vec<Listener>>>,
}

impl AuthGate {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self {
            provider,
            state: Arc::new(RwLock::new(AuthState::Pending)),
            listeners: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Resolve the initial pending state from the provider.
    pub fn initialize(&self) {
        let state = match self.provider.current() {
            Some(identity) => AuthState::SignedIn(identity),
            None => AuthState::SignedOut,
        };
        self.set_state(state);
    }

    pub fn state(&self) -> AuthState {
        self.state.read().clone()
    }

    /// Gate decision for a protected view.
    pub fn check(&self) -> GateDecision {
        match &*self.state.read() {
            AuthState::Pending => GateDecision::Loading,
            AuthState::SignedIn(_) => GateDecision::Allow,
            AuthState::SignedOut => GateDecision::RedirectToLogin,
        }
    }

    pub fn sign_in(&self, email: &str, password: &str) -> Result<Identity> {
        let identity = self.provider.sign_in(email, password)?;
        self.set_state(AuthState::SignedIn(identity.clone()));
        Ok(identity)
    }

    pub fn sign_out(&self) {
        self.provider.sign_out();
        self.set_state(AuthState::SignedOut);
    }

    /// Register a session-state-changed callback.
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&AuthState) + Send + Sync + 'static,
    {
        self.listeners.write().push(Box::new(listener));
    }

    fn set_state(&self, state: AuthState) {
        {
            let mut current = self.state.write();
            if *current == state {
                return;
            }
            *current = state.clone();
        }

        for listener in self.listeners.read().iter() {
            listener(&state);
        }
    }
}

impl Clone for AuthGate {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            state: Arc::clone(&self.state),
            listeners: Arc::clone(&self.listeners),
        }
    }
}
