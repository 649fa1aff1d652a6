//! Roots discovery.

use std::path::{Path, PathBuf};

use tokio::fs;

use linkdrop_core::result::AppResult;

/// Lists the second-level directories below a fixed base (`{base}/{disk}/{dir}`).
#[derive(Debug, Clone)]
pub struct RootsService {
    /// Base directory, typically one subdirectory per mounted disk.
    base: PathBuf,
}

impl RootsService {
    /// Creates a roots service scanning `base`.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Returns `disk/dir` paths relative to the base, sorted.
    ///
    /// Plain files and broken symlinks at either level are skipped. Failing to
    /// read a directory aborts the scan.
    pub async fn list_roots(&self) -> AppResult<Vec<String>> {
        let mut roots = Vec::new();

        let mut disks = fs::read_dir(&self.base).await?;
        while let Some(disk) = disks.next_entry().await? {
            let disk_path = disk.path();
            if !is_dir(&disk_path).await {
                continue;
            }

            let mut subs = fs::read_dir(&disk_path).await?;
            while let Some(sub) = subs.next_entry().await? {
                let sub_path = sub.path();
                if !is_dir(&sub_path).await {
                    continue;
                }
                if let Ok(relative) = sub_path.strip_prefix(&self.base) {
                    roots.push(relative.to_string_lossy().into_owned());
                }
            }
        }

        roots.sort();
        Ok(roots)
    }
}

/// Follows symlinks; an entry whose metadata cannot be read is not a directory.
async fn is_dir(path: &Path) -> bool {
    fs::metadata(path).await.map(|m| m.is_dir()).unwrap_or(false)
}
