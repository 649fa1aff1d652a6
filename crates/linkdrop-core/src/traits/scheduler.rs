//! Expiry scheduler trait.

use std::time::Duration;

/// Arranges for a token to be removed from the registry once its TTL elapses.
///
/// Removal is idempotent, so an armed expiry never needs cancelling when the
/// entry is retired early.
pub trait ExpiryScheduler: Send + Sync + std::fmt::Debug + 'static {
    /// Schedules a one-shot removal of `token` after `ttl`, measured from now.
    fn arm(&self, token: &str, ttl: Duration);
}
