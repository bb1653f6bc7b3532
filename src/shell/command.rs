//! External command execution.
//!
//! Commands are executed directly from argv vectors, never through a shell,
//! so a service name passed on the command line is always a single argument.

use crate::error::{DockhandError, Result};
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of executing an external command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output (empty when streams were inherited).
    pub stdout: String,

    /// Standard error (empty when streams were inherited).
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }
}

/// Render an argv vector as a single displayable command line.
pub fn render(argv: &[String]) -> String {
    argv.join(" ")
}

/// Execute a command with captured output.
///
/// Used for precondition checks where the output is inspected rather than
/// shown to the user.
pub fn execute_captured(argv: &[String], cwd: Option<&Path>) -> Result<CommandResult> {
    let start = Instant::now();
    let mut cmd = build(argv, cwd)?;

    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let output = cmd.output().map_err(|_| DockhandError::CommandSpawn {
        command: render(argv),
    })?;

    let duration = start.elapsed();
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    if output.status.success() {
        Ok(CommandResult::success(stdout, stderr, duration))
    } else {
        Ok(CommandResult::failure(
            output.status.code(),
            stdout,
            stderr,
            duration,
        ))
    }
}

/// Execute a command with inherited standard streams.
///
/// The child writes directly to the caller's terminal, so long-running or
/// interactive commands (`docker-compose logs -f`) display live. Blocks until
/// the child exits or the user interrupts it.
pub fn execute_passthrough(argv: &[String], cwd: Option<&Path>) -> Result<CommandResult> {
    let start = Instant::now();
    let mut cmd = build(argv, cwd)?;

    cmd.stdin(Stdio::inherit());
    cmd.stdout(Stdio::inherit());
    cmd.stderr(Stdio::inherit());

    let status = cmd
        .status()
        .map_err(|_| DockhandError::CommandSpawn {
            command: render(argv),
        })?;

    let duration = start.elapsed();

    if status.success() {
        Ok(CommandResult::success(String::new(), String::new(), duration))
    } else {
        Ok(CommandResult::failure(
            status.code(),
            String::new(),
            String::new(),
            duration,
        ))
    }
}

/// Check whether a command runs and exits successfully.
pub fn execute_check(argv: &[String], cwd: Option<&Path>) -> bool {
    execute_captured(argv, cwd)
        .map(|r| r.success)
        .unwrap_or(false)
}

fn build(argv: &[String], cwd: Option<&Path>) -> Result<Command> {
    let program = argv.first().ok_or_else(|| DockhandError::CommandSpawn {
        command: String::new(),
    })?;

    let mut cmd = Command::new(program);
    cmd.args(&argv[1..]);

    if let Some(cwd) = cwd {
        cmd.current_dir(cwd);
    }

    Ok(cmd)
}
