//! CLI command definitions and dispatch.

pub mod roots;
pub mod share;

use clap::{Parser, Subcommand};

use crate::client::ApiClient;
use crate::output::OutputFormat;
use linkdrop_core::error::AppError;

/// Linkdrop: expiring, download-limited share links
#[derive(Debug, Parser)]
#[command(name = "linkdrop", version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the Linkdrop server
    #[arg(long, global = true, default_value = "http://127.0.0.1:8080")]
    pub server: String,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Register a file or directory share
    Share(share::ShareArgs),
    /// List shareable roots on the server
    Roots,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let client = ApiClient::new(&self.server);
        match &self.command {
            Commands::Share(args) => share::execute(args, &client).await,
            Commands::Roots => roots::execute(&client, self.format).await,
        }
    }
}
