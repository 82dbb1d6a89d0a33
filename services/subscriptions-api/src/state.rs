//! Application state for the Subscriptions API service.

use std::sync::Arc;

use subtrack_core::SubscriptionService;
use subtrack_db::{DbPool, SubscriptionRepository};

use crate::config::Config;

/// Subscription service over any store implementation
pub type DynSubscriptionService = SubscriptionService<dyn SubscriptionRepository>;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Subscription lifecycle and aggregation
    pub subscriptions: Arc<DynSubscriptionService>,
    /// Database pool (readiness checks)
    pub pool: DbPool,
    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Create new application state
    pub fn new(repo: Arc<dyn SubscriptionRepository>, pool: DbPool, config: Config) -> Self {
        Self {
            subscriptions: Arc::new(SubscriptionService::new(repo)),
            pool,
            config: Arc::new(config),
        }
    }

    /// Get request timeout from config
    pub fn request_timeout(&self) -> std::time::Duration {
        self.config.request_timeout
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("http_port", &self.config.http_port)
            .field("request_timeout", &self.config.request_timeout)
            .finish_non_exhaustive()
    }
}
