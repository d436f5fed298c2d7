//! External program execution.

use crate::error::Result;
use std::process::{Command, Stdio};
use std::time::Instant;

/// Result of executing an external program.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Whether the program succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: Option<i32>, stdout: String, stderr: String) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            success: false,
        }
    }

    /// Last non-empty line of stderr, or stdout if stderr is silent.
    pub fn last_diagnostic(&self) -> Option<&str> {
        last_line(&self.stderr)
            .or_else(|| last_line(&self.stdout))
            .map(str::trim)
    }
}

fn last_line(s: &str) -> Option<&str> {
    s.lines().rev().find(|l| !l.trim().is_empty())
}

/// Run `program` with `args`, capturing both output streams.
///
/// The program is spawned directly, not through a shell, so arguments are
/// never re-split or expanded. Failing to spawn at all is an `Io` error;
/// a non-zero exit is reported through [`CommandResult`].
pub fn execute(program: &str, args: &[String]) -> Result<CommandResult> {
    let start = Instant::now();

    let mut cmd = Command::new(program);
    cmd.args(args);
    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    tracing::debug!(program, ?args, "spawning");
    let output = cmd.output()?;

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    tracing::debug!(
        program,
        code = ?output.status.code(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "finished"
    );

    if output.status.success() {
        Ok(CommandResult::success(stdout, stderr))
    } else {
        Ok(CommandResult::failure(output.status.code(), stdout, stderr))
    }
}
