//! Compose operations and plan execution.
//!
//! [`Operation`] enumerates the supported operations; each resolves to an
//! immutable [`Plan`] of external command invocations. [`execute_operation`]
//! runs a plan with catch-and-continue semantics and returns an
//! [`OperationReport`] for the caller to inspect.

pub mod operation;
pub mod runner;

pub use operation::{
    Action, Completion, Operation, Plan, BOT_SERVICE, DATABASE_SERVICE, DEBUG_COMPOSE_FILE,
};
pub use runner::{execute_operation, run_actions, ActionOutcome, OperationReport};
