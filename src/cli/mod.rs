//! CLI module for Registry Gate
//!
//! - `serve`: run the authorization gate
//! - `hash-password`: produce a password hash for seed files
//! - `check`: evaluate one request offline against a seed file

pub mod check;
pub mod hash_password;
pub mod serve;

use clap::{Parser, Subcommand};

/// Registry Gate - repository-scoped authorization for image registries
#[derive(Parser)]
#[command(name = "registry-gate")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the gate in front of the registry
    Serve,

    /// Hash a password for use in a seed file
    HashPassword(hash_password::HashPasswordArgs),

    /// Evaluate a single request and print the verdict
    Check(check::CheckArgs),
}
