//! Shell command execution.

use crate::error::{Result, SherpaError};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of executing a shell command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

/// Execute a shell command, capturing stdout and stderr.
///
/// Multi-line install scripts are handed to the shell as a single
/// argument, so `&&` chains and here-docs work as written.
pub fn execute(command: &str) -> Result<CommandResult> {
    let start = Instant::now();

    let shell = detect_shell();

    let output = Command::new(&shell)
        .arg(shell_flag())
        .arg(command)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|_| SherpaError::CommandFailed {
            command: command.to_string(),
            code: None,
        })?;

    Ok(CommandResult {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        duration: start.elapsed(),
        success: output.status.success(),
    })
}

/// Execute a command and return whether it exited zero.
pub fn execute_check(command: &str) -> bool {
    execute(command).map(|r| r.success).unwrap_or(false)
}

/// Abstraction over shell execution so the installer can be tested
/// without touching the host system.
pub trait CommandRunner {
    /// Run a command, capturing its output.
    fn run(&self, command: &str) -> Result<CommandResult>;

    /// Run a command and report only success/failure.
    fn check(&self, command: &str) -> bool {
        self.run(command).map(|r| r.success).unwrap_or(false)
    }
}

/// Production runner backed by the host shell.
#[derive(Debug, Default)]
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> Result<CommandResult> {
        execute(command)
    }
}

/// Detect the current shell.
fn detect_shell() -> String {
    if cfg!(target_os = "windows") {
        std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
    } else {
        std::env::var("SHELL").unwrap_or_else(|_| "/bin/sh".to_string())
    }
}

/// Get the flag to pass commands to the shell.
fn shell_flag() -> &'static str {
    if cfg!(target_os = "windows") {
        "/C"
    } else {
        "-c"
    }
}
