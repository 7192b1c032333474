//! Application state management
use folio_core::{Config, Portfolio, Result};
use parking_lot::RwLock;
use std::sync::Arc;

/// Thread-safe application state wrapper
pub struct AppState {
    portfolio: Arc<RwLock<Option<Portfolio>>>,
}

impl AppState {
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Result<Self> {
        let portfolio = Portfolio::new(config)?;

        Ok(Self {
            portfolio: Arc::new(RwLock::new(Some(portfolio))),
        })
    }

    pub fn initialize(&self) -> Result<()> {
        if let Some(portfolio) = self.portfolio.write().as_ref() {
            portfolio.initialize()?;
        }

        tracing::info!("Console state initialized");

        Ok(())
    }

    pub fn with_portfolio<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Portfolio) -> Result<T>,
    {
        let guard = self.portfolio.read();
        match guard.as_ref() {
            Some(portfolio) => f(portfolio),
            None => Err(folio_core::CoreError::NotInitialized),
        }
    }
}

impl Clone for AppState {
    fn clone(&self) -> Self {
        Self {
            portfolio: Arc::clone(&self.portfolio),
        }
    }
}
