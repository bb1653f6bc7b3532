//! Integration tests for the CLI.
//!
//! External tools are stubbed with shell scripts on a controlled PATH that
//! record their invocations to a log file, so the exact command sequence of
//! every operation can be asserted without Docker installed.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temp project dir plus a stub tool dir used as the entire PATH.
struct StubEnv {
    project: TempDir,
    bin: PathBuf,
    log: PathBuf,
}

impl StubEnv {
    fn new() -> Self {
        let project = TempDir::new().unwrap();
        let bin = project.path().join("bin");
        fs::create_dir(&bin).unwrap();
        let log = project.path().join("invocations.log");
        Self { project, bin, log }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(cargo_bin("dockhand"));
        cmd.current_dir(self.project.path());
        cmd.env("PATH", &self.bin);
        cmd.env("STUB_LOG", &self.log);
        cmd.env_remove("RUST_LOG");
        cmd
    }

    fn logged(&self) -> Vec<String> {
        if !self.log.exists() {
            return Vec::new();
        }
        fs::read_to_string(&self.log)
            .unwrap()
            .lines()
            .map(|l| l.to_string())
            .collect()
    }
}

#[cfg(unix)]
fn write_stub(dir: &Path, name: &str, body: &str) {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    let script = format!(
        "#!/bin/sh\nif [ \"$1\" = \"--version\" ]; then\n  echo \"{} version 9.9.9\"\n  exit 0\nfi\necho \"{} $*\" >> \"$STUB_LOG\"\n{}\n",
        name, name, body
    );
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
}

#[cfg(unix)]
fn stub_tools(env: &StubEnv) {
    write_stub(&env.bin, "docker", "exit 0");
    write_stub(&env.bin, "docker-compose", "exit 0");
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("dockhand"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Docker Compose task helper"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("dockhand"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn no_args_prints_operations_listing() -> Result<(), Box<dyn std::error::Error>> {
    let env = StubEnv::new();
    env.command()
        .assert()
        .success()
        .stdout(predicate::str::contains("start-all"))
        .stdout(predicate::str::contains("clean"))
        .stdout(predicate::str::contains("dockhand logs stock-bot"));
    assert!(env.logged().is_empty());
    Ok(())
}

#[test]
fn unknown_operation_prints_listing_and_runs_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let env = StubEnv::new();
    env.command()
        .arg("bogus-command")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available commands:"))
        .stdout(predicate::str::contains("start-bot"))
        .stdout(predicate::str::contains("dockhand start-all"));
    assert!(env.logged().is_empty());
    Ok(())
}

#[test]
fn missing_tools_exit_1_without_actions() -> Result<(), Box<dyn std::error::Error>> {
    let env = StubEnv::new();
    // Empty stub dir: neither docker nor docker-compose resolves
    env.command()
        .arg("stop-all")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("not installed"));
    assert!(env.logged().is_empty());
    Ok(())
}

#[cfg(unix)]
#[test]
fn start_all_runs_single_rebuild_up() -> Result<(), Box<dyn std::error::Error>> {
    let env = StubEnv::new();
    stub_tools(&env);
    fs::write(env.project.path().join(".env"), "BOT_TOKEN=abc\n")?;

    env.command()
        .arg("start-all")
        .assert()
        .success()
        .stdout(predicate::str::contains("All services started!"))
        .stdout(predicate::str::contains("PostgreSQL: localhost:5432"))
        .stdout(predicate::str::contains("Stock bot: localhost:8080"));

    assert_eq!(env.logged(), ["docker-compose up -d --build"]);
    Ok(())
}

#[cfg(unix)]
#[test]
fn start_bot_runs_database_then_bot() -> Result<(), Box<dyn std::error::Error>> {
    let env = StubEnv::new();
    stub_tools(&env);
    fs::write(env.project.path().join(".env"), "BOT_TOKEN=abc\n")?;

    env.command()
        .arg("start-bot")
        .assert()
        .success()
        .stdout(predicate::str::contains("Stock bot started!"));

    assert_eq!(
        env.logged(),
        [
            "docker-compose up -d postgres",
            "docker-compose up -d stock-bot"
        ]
    );
    Ok(())
}

#[cfg(unix)]
#[test]
fn start_debug_uses_debug_compose_file() -> Result<(), Box<dyn std::error::Error>> {
    let env = StubEnv::new();
    stub_tools(&env);
    fs::write(env.project.path().join(".env"), "BOT_TOKEN=abc\n")?;

    env.command().arg("start-debug").assert().success();

    assert_eq!(
        env.logged(),
        ["docker-compose -f docker-compose_debug.yml up -d --build"]
    );
    Ok(())
}

#[cfg(unix)]
#[test]
fn missing_env_warns_but_still_executes() -> Result<(), Box<dyn std::error::Error>> {
    let env = StubEnv::new();
    stub_tools(&env);

    env.command()
        .arg("start-all")
        .assert()
        .success()
        .stdout(predicate::str::contains("No .env file found"));

    assert_eq!(env.logged(), ["docker-compose up -d --build"]);
    Ok(())
}

#[cfg(unix)]
#[test]
fn stop_all_does_not_check_env() -> Result<(), Box<dyn std::error::Error>> {
    let env = StubEnv::new();
    stub_tools(&env);

    env.command()
        .arg("stop-all")
        .assert()
        .success()
        .stdout(predicate::str::contains("No .env file found").not())
        .stdout(predicate::str::contains("All services stopped!"));

    assert_eq!(env.logged(), ["docker-compose down"]);
    Ok(())
}

#[cfg(unix)]
#[test]
fn logs_without_service_targets_all() -> Result<(), Box<dyn std::error::Error>> {
    let env = StubEnv::new();
    stub_tools(&env);

    env.command().arg("logs").assert().success();

    assert_eq!(env.logged(), ["docker-compose logs -f"]);
    Ok(())
}

#[cfg(unix)]
#[test]
fn logs_with_service_targets_only_it() -> Result<(), Box<dyn std::error::Error>> {
    let env = StubEnv::new();
    stub_tools(&env);

    env.command().args(["logs", "stock-bot"]).assert().success();

    assert_eq!(env.logged(), ["docker-compose logs -f stock-bot"]);
    Ok(())
}

#[cfg(unix)]
#[test]
fn status_runs_ps() -> Result<(), Box<dyn std::error::Error>> {
    let env = StubEnv::new();
    stub_tools(&env);

    env.command().arg("status").assert().success();

    assert_eq!(env.logged(), ["docker-compose ps"]);
    Ok(())
}

#[cfg(unix)]
#[test]
fn clean_tears_down_then_prunes() -> Result<(), Box<dyn std::error::Error>> {
    let env = StubEnv::new();
    stub_tools(&env);

    env.command()
        .arg("clean")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleanup complete!"));

    assert_eq!(
        env.logged(),
        [
            "docker-compose down -v --remove-orphans",
            "docker system prune -f"
        ]
    );
    Ok(())
}

#[cfg(unix)]
#[test]
fn multi_step_continues_after_first_failure() -> Result<(), Box<dyn std::error::Error>> {
    let env = StubEnv::new();
    write_stub(&env.bin, "docker", "exit 0");
    // The database step fails; the bot step must still run
    write_stub(
        &env.bin,
        "docker-compose",
        "case \"$*\" in *postgres*) exit 1;; esac\nexit 0",
    );
    fs::write(env.project.path().join(".env"), "BOT_TOKEN=abc\n")?;

    env.command()
        .arg("start-bot")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "command: docker-compose up -d postgres",
        ))
        // Completion is gated on full success
        .stdout(predicate::str::contains("Stock bot started!").not());

    assert_eq!(
        env.logged(),
        [
            "docker-compose up -d postgres",
            "docker-compose up -d stock-bot"
        ]
    );
    Ok(())
}

#[cfg(unix)]
#[test]
fn action_failure_keeps_exit_code_zero() -> Result<(), Box<dyn std::error::Error>> {
    let env = StubEnv::new();
    write_stub(&env.bin, "docker", "exit 0");
    write_stub(&env.bin, "docker-compose", "exit 1");

    // Deliberate: action failures are reported but never fail the process;
    // only precondition failures do.
    env.command()
        .arg("stop-all")
        .assert()
        .success()
        .stdout(predicate::str::contains("failed"));

    assert_eq!(env.logged(), ["docker-compose down"]);
    Ok(())
}

#[test]
fn dry_run_previews_without_tools_or_execution() -> Result<(), Box<dyn std::error::Error>> {
    let env = StubEnv::new();
    // No stubs at all: dry-run must not need them
    env.command()
        .args(["--dry-run", "start-all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("docker-compose up -d --build"));

    assert!(env.logged().is_empty());
    Ok(())
}

#[test]
fn dry_run_clean_previews_both_steps() -> Result<(), Box<dyn std::error::Error>> {
    let env = StubEnv::new();
    env.command()
        .args(["--dry-run", "clean"])
        .assert()
        .success()
        .stdout(predicate::str::contains("docker-compose down -v --remove-orphans"))
        .stdout(predicate::str::contains("docker system prune -f"));

    assert!(env.logged().is_empty());
    Ok(())
}

#[cfg(unix)]
#[test]
fn quiet_mode_still_reports_errors() -> Result<(), Box<dyn std::error::Error>> {
    let env = StubEnv::new();
    write_stub(&env.bin, "docker", "exit 0");
    write_stub(&env.bin, "docker-compose", "exit 1");

    env.command()
        .args(["--quiet", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Running:").not())
        .stdout(predicate::str::contains("failed"));
    Ok(())
}

#[test]
fn completions_generates_script() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("dockhand"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("dockhand"));
    Ok(())
}
