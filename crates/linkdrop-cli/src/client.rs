//! Thin HTTP client for the Linkdrop server.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use linkdrop_core::error::{AppError, ErrorKind};
use linkdrop_core::types::EntryKind;

/// `POST /addEntry` success body.
#[derive(Debug, Deserialize)]
struct AddEntryResponse {
    path: String,
}

/// `GET /listRoots` success body.
#[derive(Debug, Deserialize)]
struct RootsResponse {
    roots: Vec<String>,
}

/// Client bound to one server base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for `base_url` (trailing slash optional).
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Registers a share and returns its public URL.
    ///
    /// A non-success answer becomes an error carrying the raw response body.
    pub async fn add_entry(
        &self,
        kind: EntryKind,
        path: &Path,
        ttl: u32,
        max_downloads: u32,
    ) -> Result<String, AppError> {
        let url = format!("{}/addEntry", self.base_url);
        let body = serde_json::json!({
            "type": kind,
            "path": path.to_string_lossy(),
            "ttl": ttl,
            "maxDownloads": max_downloads,
        });
        debug!(%url, %kind, "Registering share");

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| transport_error(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::new(ErrorKind::Validation, text));
        }

        let parsed: AddEntryResponse = response
            .json()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Serialization, "Unexpected response", e))?;
        Ok(parsed.path)
    }

    /// Fetches the server's shareable roots.
    pub async fn list_roots(&self) -> Result<Vec<String>, AppError> {
        let url = format!("{}/listRoots", self.base_url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| transport_error(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::internal(format!("Server returned {status}: {text}")));
        }

        let parsed: RootsResponse = response
            .json()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Serialization, "Unexpected response", e))?;
        Ok(parsed.roots)
    }
}

fn transport_error(url: &str, err: reqwest::Error) -> AppError {
    AppError::with_source(
        ErrorKind::Internal,
        format!("Could not reach {url}: {err}"),
        err,
    )
}
