//! Command-line interface for bookboard.

mod commands;

use clap::{Parser, Subcommand};

/// Bookboard - book catalog and bulletin board API
#[derive(Parser)]
#[command(name = "bookboard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API until Ctrl+C (default)
    #[command(alias = "daemon")]
    Serve,

    /// Create default config file
    #[command(alias = "--init")]
    Init,

    /// Create the default boards and list them
    Seed,
}

pub use commands::*;
