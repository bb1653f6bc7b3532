//! Clean command implementation.
//!
//! Two destructive steps: tear down with volumes and orphans, then prune.
//! The prune still runs when the teardown fails.

use std::path::{Path, PathBuf};

use crate::compose::{execute_operation, Operation};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The clean command implementation.
pub struct CleanCommand {
    project_root: PathBuf,
    dry_run: bool,
}

impl CleanCommand {
    /// Create a new clean command.
    pub fn new(project_root: &Path, dry_run: bool) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            dry_run,
        }
    }
}

impl Command for CleanCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let report = execute_operation(&Operation::Clean, &self.project_root, self.dry_run, ui);
        Ok(CommandResult::from_report(&report))
    }
}
