//! Roots discovery handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::dto::response::{RootsErrorResponse, RootsResponse};
use crate::state::AppState;

/// GET /listRoots
///
/// Failures answer 500 with a bare `{ "error": ... }` body.
pub async fn list_roots(State(state): State<AppState>) -> Response {
    match state.roots_service.list_roots().await {
        Ok(roots) => Json(RootsResponse { roots }).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to list roots");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(RootsErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
