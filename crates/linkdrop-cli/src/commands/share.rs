//! `linkdrop share`: register a file or directory.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::client::ApiClient;
use crate::output;
use linkdrop_core::error::AppError;
use linkdrop_core::types::EntryKind;

/// Arguments for the share command
#[derive(Debug, Args)]
pub struct ShareArgs {
    /// File to share
    #[arg(short, long, conflicts_with = "directory")]
    pub file: Option<PathBuf>,
    /// Directory to share (defaults to the current directory)
    #[arg(short, long)]
    pub directory: Option<PathBuf>,
    /// Lifetime in minutes
    #[arg(short, long, default_value_t = 20)]
    pub ttl: u32,
    /// Number of downloads allowed
    #[arg(short, long, default_value_t = 1)]
    pub amount: u32,
}

/// Execute the share command
pub async fn execute(args: &ShareArgs, client: &ApiClient) -> Result<(), AppError> {
    let (kind, path) = resolve_target(args)?;
    let url = client.add_entry(kind, &path, args.ttl, args.amount).await?;
    output::print_kv("Path", &url);
    Ok(())
}

/// Picks the share kind and absolute path, checking the target locally.
fn resolve_target(args: &ShareArgs) -> Result<(EntryKind, PathBuf), AppError> {
    match (&args.file, &args.directory) {
        (Some(file), _) => Ok((EntryKind::File, checked(file, EntryKind::File)?)),
        (None, Some(dir)) => Ok((EntryKind::Directory, checked(dir, EntryKind::Directory)?)),
        (None, None) => {
            let cwd = std::env::current_dir()?;
            Ok((EntryKind::Directory, checked(&cwd, EntryKind::Directory)?))
        }
    }
}

fn checked(path: &Path, kind: EntryKind) -> Result<PathBuf, AppError> {
    let ok = match kind {
        EntryKind::File => path.is_file(),
        EntryKind::Directory => path.is_dir(),
    };
    if !ok {
        return Err(AppError::validation(match kind {
            EntryKind::File => format!("File does not exist: {}", path.display()),
            EntryKind::Directory => format!("Directory does not exist: {}", path.display()),
        }));
    }
    Ok(std::fs::canonicalize(path)?)
}
