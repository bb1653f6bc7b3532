//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.
//!
//! Unrecognized operation names are captured by the external-subcommand
//! variant so the binary can fall back to the operations listing instead of
//! clap's usage error.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::ffi::OsString;
use std::path::PathBuf;

/// Dockhand - Docker Compose task helper.
#[derive(Debug, Parser)]
#[command(name = "dockhand")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Print the commands an operation would run, without executing anything
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start every service (database, bot, sync) detached, rebuilding images
    StartAll,

    /// Start the bot and its database only
    StartBot,

    /// Start services using the debug compose file
    StartDebug,

    /// Stop and remove all running services
    StopAll,

    /// Follow service logs
    Logs(LogsArgs),

    /// Show running service status
    Status,

    /// Tear down services and prune unused Docker resources
    Clean,

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Unrecognized input; handled by printing the operations listing
    #[command(external_subcommand)]
    External(Vec<OsString>),
}

/// Arguments for the `logs` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct LogsArgs {
    /// Service to follow (all services when omitted)
    pub service: Option<String>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
