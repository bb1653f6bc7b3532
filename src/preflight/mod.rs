//! Precondition checks run before external actions.
//!
//! Two checks exist: tool availability (fatal) and `.env` presence
//! (warning only).

pub mod env;
pub mod tools;

pub use env::{check_env_file, EnvFileParser, ENV_FILE_NAME};
pub use tools::{check_tool, check_tools, tools_available, ToolStatus, REQUIRED_TOOLS};
