//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use linkdrop_core::config::AppConfig;
use linkdrop_core::traits::{EntryRegistry, ExpiryScheduler};
use linkdrop_service::{AccessService, LinkService, RootsService, ShareService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// Share entry registry
    pub registry: Arc<dyn EntryRegistry>,

    // ── Services ─────────────────────────────────────────────
    /// Share registration service
    pub share_service: Arc<ShareService>,
    /// Share access controller
    pub access_service: Arc<AccessService>,
    /// Roots discovery service
    pub roots_service: Arc<RootsService>,

    /// Process start, for uptime reporting
    pub started_at: Instant,
}

impl AppState {
    /// Wires the services around an injected registry and scheduler.
    pub fn new(
        config: AppConfig,
        registry: Arc<dyn EntryRegistry>,
        scheduler: Arc<dyn ExpiryScheduler>,
    ) -> Self {
        let link_service = Arc::new(LinkService::new(config.share.token_length));
        let share_service = Arc::new(ShareService::new(
            Arc::clone(&registry),
            scheduler,
            link_service,
            config.share.clone(),
        ));
        let access_service = Arc::new(AccessService::new(Arc::clone(&registry)));
        let roots_service = Arc::new(RootsService::new(&config.share.roots_base));

        Self {
            config: Arc::new(config),
            registry,
            share_service,
            access_service,
            roots_service,
            started_at: Instant::now(),
        }
    }
}
