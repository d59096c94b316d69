use std::sync::Arc;
use std::time::Duration;

use crate::domain::a001_bank::directory::{BankDirectory, MockBankDirectory};
use crate::shared::config::Config;
use crate::system::auth::session_store::SessionStore;

/// Services shared by all handlers. Built once in `main` and handed to the
/// router, never reached through globals.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionStore>,
    pub banks: Arc<dyn BankDirectory>,
}

impl AppState {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let ttl = chrono::Duration::hours(config.session.ttl_hours);
        let latency = Duration::from_millis(config.mock.latency_ms);

        Ok(Self {
            sessions: Arc::new(SessionStore::new(&config.users, ttl)?),
            banks: Arc::new(MockBankDirectory::new(latency)),
        })
    }
}
