//! Tool availability checks.
//!
//! Before any service-affecting action runs, both `docker` and
//! `docker-compose` must answer a version query. A failing query is fatal.

use crate::shell::{execute_captured, render};
use crate::ui::UserInterface;

/// Tools that must be present before any compose action runs.
pub const REQUIRED_TOOLS: [&str; 2] = ["docker", "docker-compose"];

/// Outcome of probing a single tool.
#[derive(Debug, Clone)]
pub struct ToolStatus {
    /// Tool binary name.
    pub name: String,

    /// Whether the version query succeeded.
    pub available: bool,

    /// Extracted version, when the query output contained one.
    pub version: Option<String>,
}

/// Probe a tool by running `<tool> --version` with captured output.
pub fn check_tool(name: &str) -> ToolStatus {
    let argv = vec![name.to_string(), "--version".to_string()];

    match execute_captured(&argv, None) {
        Ok(result) if result.success => ToolStatus {
            name: name.to_string(),
            available: true,
            version: extract_version(&result.stdout),
        },
        other => {
            tracing::debug!(tool = name, command = %render(&argv), "version query failed: {:?}", other);
            ToolStatus {
                name: name.to_string(),
                available: false,
                version: None,
            }
        }
    }
}

/// Probe every required tool.
pub fn check_tools() -> Vec<ToolStatus> {
    REQUIRED_TOOLS.iter().map(|name| check_tool(name)).collect()
}

/// Verify the required tools and report through the UI.
///
/// Returns `false` (after printing an error) when any tool is missing; the
/// caller must not issue any external action in that case.
pub fn tools_available(ui: &mut dyn UserInterface) -> bool {
    let statuses = check_tools();

    for status in &statuses {
        if let Some(version) = &status.version {
            tracing::debug!(tool = %status.name, %version, "tool available");
            if ui.output_mode().shows_detail() {
                ui.message(&format!("{} {}", status.name, version));
            }
        }
    }

    let missing: Vec<&str> = statuses
        .iter()
        .filter(|s| !s.available)
        .map(|s| s.name.as_str())
        .collect();

    if missing.is_empty() {
        true
    } else {
        ui.error(&format!(
            "{} not installed or not running",
            missing.join(" and ")
        ));
        false
    }
}

/// Extract a version number from version-query output.
fn extract_version(output: &str) -> Option<String> {
    let patterns = [r"(\d+\.\d+\.\d+)", r"version\s+(\d+\.\d+)", r"v(\d+\.\d+)"];

    for pattern in &patterns {
        if let Ok(re) = regex::Regex::new(pattern) {
            if let Some(caps) = re.captures(output) {
                if let Some(m) = caps.get(1) {
                    return Some(m.as_str().to_string());
                }
            }
        }
    }

    None
}
