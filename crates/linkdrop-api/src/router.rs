//! Route definitions for the Linkdrop HTTP API.

use axum::{
    Router,
    extract::Request,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::Span;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .merge(management_routes())
        .merge(access_routes())
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Registration, discovery, and health
fn management_routes() -> Router<AppState> {
    Router::new()
        .route("/addEntry", post(handlers::share::add_entry))
        .route("/listRoots", get(handlers::roots::list_roots))
        .route("/health", get(handlers::health::health))
}

/// Public token access. Static routes above take precedence over `/{token}`.
fn access_routes() -> Router<AppState> {
    Router::new()
        .route("/{token}", get(handlers::access::access_root))
        .route("/{token}/{*sub_path}", get(handlers::access::access_child))
}

/// Request span carrying the redacted path instead of the full URI.
fn request_span(request: &Request) -> Span {
    tracing::debug_span!(
        "request",
        method = %request.method(),
        path = %middleware::logging::redact_path(request.uri().path()),
        version = ?request.version(),
    )
}
