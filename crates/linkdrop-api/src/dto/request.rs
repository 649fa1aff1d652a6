//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use linkdrop_core::types::EntryKind;

/// `POST /addEntry` body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct AddEntryRequest {
    /// `"file"` or `"directory"`.
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Absolute path of the target.
    #[validate(length(min = 1, message = "path is required"))]
    pub path: String,
    /// TTL in minutes.
    #[validate(range(min = 1, message = "ttl must be at least 1 minute"))]
    pub ttl: Option<u32>,
    /// Download quota.
    #[serde(rename = "maxDownloads")]
    #[validate(range(min = 1, message = "maxDownloads must be at least 1"))]
    pub max_downloads: Option<u32>,
}
