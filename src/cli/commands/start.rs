//! Start command implementations.
//!
//! `start-all`, `start-bot`, and `start-debug` differ only in the operation
//! they dispatch; `start-bot` brings up the database first because the bot
//! depends on it.

use std::path::{Path, PathBuf};

use crate::compose::{execute_operation, Operation};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The start-all command implementation.
pub struct StartAllCommand {
    project_root: PathBuf,
    dry_run: bool,
}

impl StartAllCommand {
    /// Create a new start-all command.
    pub fn new(project_root: &Path, dry_run: bool) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            dry_run,
        }
    }
}

impl Command for StartAllCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let report = execute_operation(&Operation::StartAll, &self.project_root, self.dry_run, ui);
        Ok(CommandResult::from_report(&report))
    }
}

/// The start-bot command implementation.
pub struct StartBotCommand {
    project_root: PathBuf,
    dry_run: bool,
}

impl StartBotCommand {
    /// Create a new start-bot command.
    pub fn new(project_root: &Path, dry_run: bool) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            dry_run,
        }
    }
}

impl Command for StartBotCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let report = execute_operation(&Operation::StartBot, &self.project_root, self.dry_run, ui);
        Ok(CommandResult::from_report(&report))
    }
}

/// The start-debug command implementation.
pub struct StartDebugCommand {
    project_root: PathBuf,
    dry_run: bool,
}

impl StartDebugCommand {
    /// Create a new start-debug command.
    pub fn new(project_root: &Path, dry_run: bool) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            dry_run,
        }
    }
}

impl Command for StartDebugCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let report =
            execute_operation(&Operation::StartDebug, &self.project_root, self.dry_run, ui);
        Ok(CommandResult::from_report(&report))
    }
}
