//! Operations listing.
//!
//! Printed when the first argument is absent or does not match any known
//! operation. Performs no external action and exits successfully.

use crate::compose::Operation;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The fallback help listing.
pub struct HelpCommand;

impl HelpCommand {
    /// Create a new help command.
    pub fn new() -> Self {
        Self
    }
}

impl Default for HelpCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for HelpCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_header("Dockhand - Docker Compose task helper");

        ui.message("Available commands:");
        for (name, description) in Operation::summaries() {
            ui.message(&format!("  {:<12} - {}", name, description));
        }

        ui.message("");
        ui.message("Examples:");
        ui.message("  dockhand start-all");
        ui.message("  dockhand logs stock-bot");

        Ok(CommandResult::success())
    }
}
