//! Public token access: file downloads and directory listings.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use tracing::{debug, warn};

use linkdrop_core::error::AppError;
use linkdrop_core::types::share::token_prefix;
use linkdrop_service::Decision;

use crate::download::stream_attachment;
use crate::error::ApiResult;
use crate::listing::{read_listing, render_listing};
use crate::state::AppState;

/// GET /{token}
pub async fn access_root(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> ApiResult<Response> {
    let decision = state.access_service.resolve_root(&token);
    respond(&token, decision).await
}

/// GET /{token}/{*sub_path}
pub async fn access_child(
    State(state): State<AppState>,
    Path((token, sub_path)): Path<(String, String)>,
) -> ApiResult<Response> {
    let decision = state.access_service.resolve_child(&token, &sub_path).await;
    respond(&token, decision).await
}

async fn respond(token: &str, decision: Decision) -> ApiResult<Response> {
    match decision {
        Decision::ServeFile(path) => {
            debug!(token = %token_prefix(token), file = %path.display(), "Serving file");
            Ok(stream_attachment(&path).await?)
        }
        Decision::ListDirectory(dir) => {
            let items = read_listing(&dir).await?;
            Ok(render_listing(token, &dir, &items).into_response())
        }
        Decision::Forbidden => {
            warn!(token = %token_prefix(token), "Download refused, limit reached");
            Err(AppError::forbidden("Download limit reached").into())
        }
        Decision::NotFound => Err(AppError::not_found("Not found").into()),
    }
}
