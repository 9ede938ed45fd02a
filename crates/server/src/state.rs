use std::sync::Arc;

use lotto_core::{Config, ConfigError, SanitizedConfig, TicketNumberEngine, TicketStore};

/// Shared application state
pub struct AppState {
    config: Config,
    ticket_store: Arc<dyn TicketStore>,
    engine: TicketNumberEngine,
}

impl AppState {
    pub fn new(config: Config, ticket_store: Arc<dyn TicketStore>) -> Result<Self, ConfigError> {
        let engine =
            TicketNumberEngine::with_config(Arc::clone(&ticket_store), config.lottery.clone())?;
        Ok(Self {
            config,
            ticket_store,
            engine,
        })
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn ticket_store(&self) -> &dyn TicketStore {
        self.ticket_store.as_ref()
    }

    pub fn engine(&self) -> &TicketNumberEngine {
        &self.engine
    }
}
