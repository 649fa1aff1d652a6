//! Share registration handler.

use std::path::PathBuf;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use validator::Validate;

use linkdrop_core::error::AppError;
use linkdrop_service::RegisterShare;

use crate::dto::request::AddEntryRequest;
use crate::dto::response::AddEntryResponse;
use crate::error::ApiResult;
use crate::state::AppState;

/// POST /addEntry
pub async fn add_entry(
    State(state): State<AppState>,
    payload: Result<Json<AddEntryRequest>, JsonRejection>,
) -> ApiResult<Json<AddEntryResponse>> {
    let Json(req) = payload.map_err(|e| AppError::validation(e.body_text()))?;
    req.validate()
        .map_err(|e| AppError::validation(format!("Invalid request: {e}")))?;

    let share = state
        .share_service
        .register(RegisterShare {
            kind: req.kind,
            path: PathBuf::from(req.path),
            ttl_minutes: req.ttl,
            max_downloads: req.max_downloads,
        })
        .await?;

    Ok(Json(AddEntryResponse { path: share.url }))
}
