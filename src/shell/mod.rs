//! External process execution.

pub mod command;

pub use command::{
    execute_captured, execute_check, execute_passthrough, render, CommandResult,
};
