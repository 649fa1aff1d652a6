//! TTL expiry backed by tokio timers.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use linkdrop_core::traits::registry::EntryRegistry;
use linkdrop_core::traits::scheduler::ExpiryScheduler;
use linkdrop_core::types::share::token_prefix;

/// Spawns one sleeping task per armed entry.
///
/// Tasks are detached; a task whose entry was already retired on quota finds
/// nothing to remove and exits quietly.
#[derive(Debug, Clone)]
pub struct TokioExpiryScheduler {
    registry: Arc<dyn EntryRegistry>,
}

impl TokioExpiryScheduler {
    /// Creates a scheduler that removes expired tokens from `registry`.
    pub fn new(registry: Arc<dyn EntryRegistry>) -> Self {
        Self { registry }
    }
}

impl ExpiryScheduler for TokioExpiryScheduler {
    fn arm(&self, token: &str, ttl: Duration) {
        let registry = Arc::clone(&self.registry);
        let token = token.to_string();

        debug!(token = %token_prefix(&token), ttl_secs = ttl.as_secs(), "Armed share expiry");

        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            match registry.remove(&token) {
                Some(entry) => info!(
                    token = %entry.log_id(),
                    downloads = entry.download_count,
                    "Share entry expired"
                ),
                None => debug!(token = %token_prefix(&token), "Expiry fired for retired entry"),
            }
        });
    }
}
