//! Status command implementation.

use std::path::{Path, PathBuf};

use crate::compose::{execute_operation, Operation};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The status command implementation.
pub struct StatusCommand {
    project_root: PathBuf,
    dry_run: bool,
}

impl StatusCommand {
    /// Create a new status command.
    pub fn new(project_root: &Path, dry_run: bool) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            dry_run,
        }
    }
}

impl Command for StatusCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let report = execute_operation(&Operation::Status, &self.project_root, self.dry_run, ui);
        Ok(CommandResult::from_report(&report))
    }
}
