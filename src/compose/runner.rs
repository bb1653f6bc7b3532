//! Plan execution.
//!
//! Actions run sequentially with inherited standard streams. A failing action
//! is reported and recorded, never re-thrown: later actions of the same plan
//! still run, and the caller inspects the outcomes.

use std::path::Path;

use crate::preflight;
use crate::shell::execute_passthrough;
use crate::ui::UserInterface;

use super::operation::{Action, Operation};

/// Outcome of one executed action, inspected by the caller.
#[derive(Debug, Clone)]
pub struct ActionOutcome {
    /// Rendered command line.
    pub command: String,

    /// Human description of the action.
    pub description: String,

    /// Whether the action exited with status 0.
    pub success: bool,

    /// Exit code (None when killed by signal or never spawned).
    pub exit_code: Option<i32>,
}

/// Result of dispatching one operation.
#[derive(Debug, Clone)]
pub struct OperationReport {
    /// False when the tool-availability precondition failed; no action ran.
    pub preconditions_ok: bool,

    /// Per-action outcomes, in execution order.
    pub outcomes: Vec<ActionOutcome>,
}

impl OperationReport {
    /// Whether every action of the plan ran and succeeded.
    pub fn all_succeeded(&self) -> bool {
        self.preconditions_ok && self.outcomes.iter().all(|o| o.success)
    }
}

/// Run a list of actions, continuing past failures.
pub fn run_actions(
    actions: &[Action],
    project_root: &Path,
    ui: &mut dyn UserInterface,
) -> Vec<ActionOutcome> {
    let mut outcomes = Vec::with_capacity(actions.len());

    for action in actions {
        let command = action.command_line();
        ui.message(&format!("Running: {}", action.description));
        ui.command(&command);
        tracing::info!(%command, "executing");

        let outcome = match execute_passthrough(&action.argv, Some(project_root)) {
            Ok(result) if result.success => {
                ui.success(&format!("{} finished", action.description));
                ActionOutcome {
                    command,
                    description: action.description.clone(),
                    success: true,
                    exit_code: result.exit_code,
                }
            }
            Ok(result) => {
                ui.error(&format!(
                    "{} failed (command: {}, exit code: {})",
                    action.description,
                    command,
                    result
                        .exit_code
                        .map(|c| c.to_string())
                        .unwrap_or_else(|| "killed".to_string()),
                ));
                ActionOutcome {
                    command,
                    description: action.description.clone(),
                    success: false,
                    exit_code: result.exit_code,
                }
            }
            Err(e) => {
                ui.error(&format!(
                    "{} failed (command: {}): {}",
                    action.description, command, e
                ));
                ActionOutcome {
                    command,
                    description: action.description.clone(),
                    success: false,
                    exit_code: None,
                }
            }
        };

        outcomes.push(outcome);
    }

    outcomes
}

/// Dispatch one operation: banner, preconditions, actions, completion notes.
///
/// With `dry_run` set, the plan's command lines are printed and nothing is
/// checked or executed.
pub fn execute_operation(
    operation: &Operation,
    project_root: &Path,
    dry_run: bool,
    ui: &mut dyn UserInterface,
) -> OperationReport {
    let plan = operation.plan();

    ui.show_header(plan.banner);

    if dry_run {
        for action in &plan.actions {
            ui.command(&action.command_line());
        }
        return OperationReport {
            preconditions_ok: true,
            outcomes: Vec::new(),
        };
    }

    if !preflight::tools_available(ui) {
        return OperationReport {
            preconditions_ok: false,
            outcomes: Vec::new(),
        };
    }

    if plan.check_env {
        preflight::check_env_file(project_root, ui);
    }

    let outcomes = run_actions(&plan.actions, project_root, ui);

    let report = OperationReport {
        preconditions_ok: true,
        outcomes,
    };

    if report.all_succeeded() {
        if let Some(completion) = &plan.completion {
            ui.success(completion.summary);
            for note in &completion.notes {
                ui.info(note);
            }
        }
    }

    report
}
