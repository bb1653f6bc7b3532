//! Stop command implementation.

use std::path::{Path, PathBuf};

use crate::compose::{execute_operation, Operation};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The stop-all command implementation.
pub struct StopAllCommand {
    project_root: PathBuf,
    dry_run: bool,
}

impl StopAllCommand {
    /// Create a new stop-all command.
    pub fn new(project_root: &Path, dry_run: bool) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            dry_run,
        }
    }
}

impl Command for StopAllCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let report = execute_operation(&Operation::StopAll, &self.project_root, self.dry_run, ui);
        Ok(CommandResult::from_report(&report))
    }
}
