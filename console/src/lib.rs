//! Folio admin console
//!
//! Command layer for the admin UI. State lives in [`AppState`]; every
//! command takes the state plus plain data and returns a
//! [`commands::CommandResult`] envelope.

pub mod commands;
mod state;

pub use commands::{CommandResult, EntryInfo};
pub use state::AppState;
