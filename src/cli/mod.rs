//! CLI module for the organisation directory service

pub mod serve;

use clap::{Parser, Subcommand};

/// Organisation Directory API - multi-tenant user and organisation directory
#[derive(Parser)]
#[command(name = "org-directory-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,
}
