//! `linkdrop roots`: list shareable directories on the server.

use serde::Serialize;
use tabled::Tabled;

use crate::client::ApiClient;
use crate::output::{self, OutputFormat};
use linkdrop_core::error::AppError;

/// Roots display row
#[derive(Debug, Serialize, Tabled)]
struct RootRow {
    /// `disk/dir` path relative to the server's roots base
    root: String,
}

/// Execute the roots command
pub async fn execute(client: &ApiClient, format: OutputFormat) -> Result<(), AppError> {
    let rows: Vec<RootRow> = client
        .list_roots()
        .await?
        .into_iter()
        .map(|root| RootRow { root })
        .collect();
    output::print_list(&rows, format);
    Ok(())
}
