//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::compose::OperationReport;
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Map an operation report to a process result.
    ///
    /// Only a failed precondition check fails the process; action failures
    /// were already reported and leave the exit code at 0.
    pub fn from_report(report: &OperationReport) -> Self {
        if report.preconditions_ok {
            Self::success()
        } else {
            Self::failure(1)
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    dry_run: bool,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf, dry_run: bool) -> Self {
        Self {
            project_root,
            dry_run,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it. Absent and unrecognized operations print the
    /// operations listing.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::StartAll) => {
                let cmd = super::start::StartAllCommand::new(&self.project_root, self.dry_run);
                cmd.execute(ui)
            }
            Some(Commands::StartBot) => {
                let cmd = super::start::StartBotCommand::new(&self.project_root, self.dry_run);
                cmd.execute(ui)
            }
            Some(Commands::StartDebug) => {
                let cmd = super::start::StartDebugCommand::new(&self.project_root, self.dry_run);
                cmd.execute(ui)
            }
            Some(Commands::StopAll) => {
                let cmd = super::stop::StopAllCommand::new(&self.project_root, self.dry_run);
                cmd.execute(ui)
            }
            Some(Commands::Logs(args)) => {
                let cmd =
                    super::logs::LogsCommand::new(&self.project_root, self.dry_run, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Status) => {
                let cmd = super::status::StatusCommand::new(&self.project_root, self.dry_run);
                cmd.execute(ui)
            }
            Some(Commands::Clean) => {
                let cmd = super::clean::CleanCommand::new(&self.project_root, self.dry_run);
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            Some(Commands::External(_)) | None => {
                let cmd = super::help::HelpCommand::new();
                cmd.execute(ui)
            }
        }
    }
}
