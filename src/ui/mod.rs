//! Console reporting components.
//!
//! This module provides:
//! - [`UserInterface`] trait so dispatch logic has no direct dependency on a
//!   terminal-formatting mechanism
//! - [`TerminalUI`] for terminal usage
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use dockhand::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_header("🐳 Starting all services");
//! ui.success("All services started");
//! assert!(ui.successes().contains(&"All services started".to_string()));
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, DockhandTheme};

/// Trait for leveled, human-readable status reporting.
///
/// This trait allows capturing the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a plain message.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Display an informational line (endpoint, hint).
    fn info(&mut self, msg: &str);

    /// Display a command line about to be (or that would be) executed.
    fn command(&mut self, command: &str);

    /// Show an operation banner.
    fn show_header(&mut self, title: &str);

    /// Check if running attached to a terminal.
    fn is_interactive(&self) -> bool;
}
