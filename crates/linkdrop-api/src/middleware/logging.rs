//! Request/response logging middleware.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::info;

/// Logs method, path, status, and duration.
///
/// Share tokens appear in paths, so only the first path segment's prefix is
/// logged for public access routes.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = redact_path(request.uri().path());
    let start = Instant::now();

    let response = next.run(request).await;

    info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        duration_ms = start.elapsed().as_millis() as u64,
        "HTTP request"
    );

    response
}

/// Shortens the token segment of a public access path to its log prefix.
pub(crate) fn redact_path(path: &str) -> String {
    let trimmed = path.trim_start_matches('/');
    let (first, rest) = match trimmed.split_once('/') {
        Some((first, rest)) => (first, Some(rest)),
        None => (trimmed, None),
    };

    if matches!(first, "" | "addEntry" | "listRoots" | "health") {
        return path.to_string();
    }

    let prefix = linkdrop_core::types::share::token_prefix(first);
    match rest {
        Some(rest) => format!("/{prefix}…/{rest}"),
        None => format!("/{prefix}…"),
    }
}
