//! Share entry, the unit of state held by the entry registry.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a share entry points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A single file; every root access consumes quota.
    File,
    /// A directory tree; listing is free, files beneath it share one quota.
    Directory,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Directory => write!(f, "directory"),
        }
    }
}

/// A registered share link.
///
/// Everything except `download_count` is fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareEntry {
    /// Unguessable URL token, unique within the registry.
    pub token: String,
    /// File or directory.
    pub kind: EntryKind,
    /// Absolute filesystem path of the shared target.
    pub target_path: PathBuf,
    /// Minutes until the entry self-destructs.
    pub ttl_minutes: u32,
    /// Download quota.
    pub max_downloads: u32,
    /// Downloads granted so far.
    pub download_count: u32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl ShareEntry {
    /// Creates a fresh entry with a zero download count.
    pub fn new(
        token: impl Into<String>,
        kind: EntryKind,
        target_path: impl Into<PathBuf>,
        ttl_minutes: u32,
        max_downloads: u32,
    ) -> Self {
        Self {
            token: token.into(),
            kind,
            target_path: target_path.into(),
            ttl_minutes,
            max_downloads,
            download_count: 0,
            created_at: Utc::now(),
        }
    }

    /// The TTL as a duration.
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(u64::from(self.ttl_minutes) * 60)
    }

    /// Wall-clock time at which the entry is scheduled to expire.
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.created_at + chrono::Duration::minutes(i64::from(self.ttl_minutes))
    }

    /// Whether the quota has been fully consumed.
    pub fn is_exhausted(&self) -> bool {
        self.download_count >= self.max_downloads
    }

    /// Downloads still available.
    pub fn remaining_downloads(&self) -> u32 {
        self.max_downloads.saturating_sub(self.download_count)
    }

    /// Short token prefix safe to put in logs.
    pub fn log_id(&self) -> &str {
        token_prefix(&self.token)
    }
}

/// Returns at most the first eight characters of a token.
pub fn token_prefix(token: &str) -> &str {
    match token.char_indices().nth(8) {
        Some((idx, _)) => &token[..idx],
        None => token,
    }
}
