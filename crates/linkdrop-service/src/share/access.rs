//! Share access control and download accounting.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info};

use linkdrop_core::traits::{EntryRegistry, Retention};
use linkdrop_core::types::EntryKind;
use linkdrop_core::types::share::token_prefix;

use crate::path::resolve_file_within;

/// Outcome of resolving a share request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Unknown token, wrong kind, or unresolvable sub-path.
    NotFound,
    /// The file quota was already used up; the entry has been removed.
    Forbidden,
    /// Stream this file to the client.
    ServeFile(PathBuf),
    /// Render a listing of this directory.
    ListDirectory(PathBuf),
}

impl Decision {
    /// Whether the decision grants a download.
    pub fn is_grant(&self) -> bool {
        matches!(self, Self::ServeFile(_))
    }
}

/// Handles public share access and download accounting.
#[derive(Debug, Clone)]
pub struct AccessService {
    /// Entry registry.
    registry: Arc<dyn EntryRegistry>,
}

impl AccessService {
    /// Creates a new access service.
    pub fn new(registry: Arc<dyn EntryRegistry>) -> Self {
        Self { registry }
    }

    /// Resolves a request for the share root (`GET /{token}`).
    ///
    /// File shares consume one download per grant and answer `Forbidden`
    /// (retiring the entry) once the quota is spent. Directory shares list
    /// for free.
    pub fn resolve_root(&self, token: &str) -> Decision {
        let mut decision = Decision::NotFound;

        let after = self.registry.mutate(token, &mut |entry| match entry.kind {
            EntryKind::Directory => {
                decision = Decision::ListDirectory(entry.target_path.clone());
                Retention::Keep
            }
            EntryKind::File if entry.is_exhausted() => {
                decision = Decision::Forbidden;
                Retention::Remove
            }
            EntryKind::File => {
                entry.download_count += 1;
                decision = Decision::ServeFile(entry.target_path.clone());
                Retention::Keep
            }
        });

        match (&decision, after) {
            (Decision::Forbidden, _) => {
                info!(token = %token_prefix(token), "Download limit reached, share retired");
            }
            (Decision::ServeFile(_), Some(entry)) => {
                debug!(
                    token = %entry.log_id(),
                    remaining = entry.remaining_downloads(),
                    "File download granted"
                );
            }
            _ => {}
        }
        decision
    }

    /// Resolves a request for a file beneath a directory share
    /// (`GET /{token}/{sub_path}`).
    ///
    /// Every grant counts against the directory's shared quota. The grant
    /// that spends the last download is still served; the entry is removed
    /// in the same critical section, so later requests see `NotFound`.
    pub async fn resolve_child(&self, token: &str, sub_path: &str) -> Decision {
        let Some(entry) = self.registry.get(token) else {
            return Decision::NotFound;
        };
        if entry.kind != EntryKind::Directory {
            return Decision::NotFound;
        }

        let Some(file) = resolve_file_within(&entry.target_path, sub_path).await else {
            return Decision::NotFound;
        };

        let mut decision = Decision::NotFound;
        let mut retired = false;

        self.registry.mutate(token, &mut |entry| {
            if entry.kind != EntryKind::Directory {
                return Retention::Keep;
            }
            entry.download_count += 1;
            decision = Decision::ServeFile(file.clone());
            if entry.is_exhausted() {
                retired = true;
                Retention::Remove
            } else {
                Retention::Keep
            }
        });

        if retired {
            info!(token = %token_prefix(token), "Directory quota spent, share retired");
        }
        decision
    }
}
