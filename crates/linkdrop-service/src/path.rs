//! Sub-path resolution confined to a shared directory tree.

use std::path::{Component, Path, PathBuf};

/// Turns a request sub-path into a relative path with only normal components.
///
/// Returns `None` for empty paths and for any `..`, root, or prefix component.
pub fn sanitize(sub_path: &str) -> Option<PathBuf> {
    let mut clean = PathBuf::new();
    for component in Path::new(sub_path).components() {
        match component {
            Component::Normal(part) => clean.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    if clean.as_os_str().is_empty() {
        None
    } else {
        Some(clean)
    }
}

/// Resolves `sub_path` under `root` to an existing regular file.
///
/// The resolved file is canonicalized and must still lie under the
/// canonicalized root, so symlinks cannot lead out of the tree.
pub async fn resolve_file_within(root: &Path, sub_path: &str) -> Option<PathBuf> {
    let relative = sanitize(sub_path)?;

    let canonical_root = tokio::fs::canonicalize(root).await.ok()?;
    let canonical = tokio::fs::canonicalize(root.join(relative)).await.ok()?;
    if !canonical.starts_with(&canonical_root) {
        return None;
    }

    let meta = tokio::fs::metadata(&canonical).await.ok()?;
    meta.is_file().then_some(canonical)
}
