//! Shared handler state

use crate::store::Store;
use chrono::Duration;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Default lifetime of issued tokens
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 12;

#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Arc<RwLock<Store>>,
    pub token_ttl: Duration,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            token_ttl: Duration::hours(DEFAULT_TOKEN_TTL_HOURS),
        }
    }

    pub fn with_token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }
}
