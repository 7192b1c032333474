//! Folio Auth
//!
//! Admin access control: an identity-provider seam (credential checks
//! are delegated, never implemented by callers), and the gate that
//! protects admin surfaces. Single admin identity, no roles.

mod error;
mod gate;
mod provider;

pub use error::AuthError;
pub use gate::{AuthGate, AuthState, GateDecision};
pub use provider::{ConfiguredAdmin, Identity, IdentityProvider};

pub type Result<T> = std::result::Result<T, AuthError>;
