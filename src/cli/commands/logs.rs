//! Logs command implementation.
//!
//! Follows logs until the user interrupts; the child inherits the terminal,
//! so there is no output handling here.

use std::path::{Path, PathBuf};

use crate::cli::args::LogsArgs;
use crate::compose::{execute_operation, Operation};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The logs command implementation.
pub struct LogsCommand {
    project_root: PathBuf,
    dry_run: bool,
    args: LogsArgs,
}

impl LogsCommand {
    /// Create a new logs command.
    pub fn new(project_root: &Path, dry_run: bool, args: LogsArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            dry_run,
            args,
        }
    }
}

impl Command for LogsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let operation = Operation::Logs {
            service: self.args.service.clone(),
        };
        let report = execute_operation(&operation, &self.project_root, self.dry_run, ui);
        Ok(CommandResult::from_report(&report))
    }
}
