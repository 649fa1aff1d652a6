//! Response DTOs.

use serde::{Deserialize, Serialize};

/// `POST /addEntry` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddEntryResponse {
    /// Public share URL.
    pub path: String,
}

/// `GET /listRoots` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootsResponse {
    /// `disk/dir` paths relative to the roots base.
    pub roots: Vec<String>,
}

/// `GET /listRoots` failure body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootsErrorResponse {
    /// Error description.
    pub error: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
    /// Uptime.
    pub uptime_seconds: u64,
    /// Live share entries.
    pub active_entries: usize,
}
