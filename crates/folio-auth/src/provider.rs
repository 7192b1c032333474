//! Identity provider seam
//!
//! Credential verification is delegated behind [`IdentityProvider`];
//! the rest of the system only sees sign-in/sign-out and the current
//! identity. [`ConfiguredAdmin`] is the shipped implementation: one
//! admin account checked against a configured email and password
//! digest.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::AuthError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub email: String,
}

pub trait IdentityProvider: Send + Sync {
    /// Verify credentials and establish a session.
    fn sign_in(&self, email: &str, password: &str) -> Result<Identity>;

    fn sign_out(&self);

    /// The currently signed-in identity, if any.
    fn current(&self) -> Option<Identity>;
}

/// Single-admin provider backed by configuration.
pub struct ConfiguredAdmin {
    email: String,
    password_digest: String,
    current: RwLock<Option<Identity>>,
}

impl ConfiguredAdmin {
    pub fn new(email: String, password_digest: String) -> Self {
        Self {
            email,
            password_digest,
            current: RwLock::new(None),
        }
    }

    /// Hex SHA-256 of a password, the form stored in configuration.
    pub fn digest(password: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(password.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

impl IdentityProvider for ConfiguredAdmin {
    fn sign_in(&self, email: &str, password: &str) -> Result<Identity> {
        if email.trim() != self.email || Self::digest(password) != self.password_digest {
            tracing::warn!(email = %email, "Rejected sign-in attempt");
            return Err(AuthError::InvalidCredentials);
        }

        let identity = Identity {
            email: self.email.clone(),
        };
        *self.current.write() = Some(identity.clone());

        tracing::info!(email = %identity.email, "Admin signed in");

        Ok(identity)
    }

    fn sign_out(&self) {
        if self.current.write().take().is_some() {
            tracing::info!("Admin signed out");
        }
    }

    fn current(&self) -> Option<Identity> {
        self.current.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> ConfiguredAdmin {
        ConfiguredAdmin::new(
            "admin@example.com".to_string(),
            ConfiguredAdmin::digest("hunter2"),
        )
    }

    #[test]
    fn test_sign_in_with_valid_credentials() {
        let provider = provider();
        let identity = provider.sign_in("admin@example.com", "hunter2").unwrap();
        assert_eq!(identity.email, "admin@example.com");
        assert_eq!(provider.current(), Some(identity));
    }

    #[test]
    fn test_rejects_bad_password() {
        let provider = provider();
        assert!(matches!(
            provider.sign_in("admin@example.com", "wrong"),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(provider.current().is_none());
    }

    #[test]
    fn test_rejects_unknown_email() {
        let provider = provider();
        assert!(provider.sign_in("other@example.com", "hunter2").is_err());
    }

    #[test]
    fn test_sign_out_clears_session() {
        let provider = provider();
        provider.sign_in("admin@example.com", "hunter2").unwrap();
        provider.sign_out();
        assert!(provider.current().is_none());
    }
}
