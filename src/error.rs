//! Error types for dockhand operations.
//!
//! This module defines [`DockhandError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `DockhandError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `DockhandError::Other`) for unexpected errors
//! - Compose action failures are reported as values
//!   ([`crate::compose::ActionOutcome`]), not errors, so a failed invocation
//!   never aborts the rest of a multi-step operation

use thiserror::Error;

/// Core error type for dockhand operations.
#[derive(Debug, Error)]
pub enum DockhandError {
    /// A required external tool is not installed or not runnable.
    #[error("Required tool '{tool}' is not installed or not running")]
    ToolUnavailable { tool: String },

    /// An external command could not be spawned.
    #[error("Command failed to start: {command}")]
    CommandSpawn { command: String },

    /// An external command exited with a non-zero status.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for dockhand operations.
pub type Result<T> = std::result::Result<T, DockhandError>;
