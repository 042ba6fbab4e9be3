//! Tool invocation: runs a checker executable against a fixture.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::{Error, Result};

/// Captured outcome of one tool invocation.
#[derive(Debug, Clone)]
pub struct ScriptResult {
    /// Process exit code, or `None` when terminated by a signal.
    pub exit_code: Option<i32>,
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
}

impl ScriptResult {
    /// Echoes captured output to the harness's own streams.
    ///
    /// Called before any expectation check so a failing scenario is
    /// diagnosable from the run log alone.
    pub fn echo(&self) {
        print!("{}", self.stdout);
        if !self.stdout.ends_with('\n') && !self.stdout.is_empty() {
            println!();
        }
        if !self.stderr.is_empty() {
            eprint!("{}", self.stderr);
            if !self.stderr.ends_with('\n') {
                eprintln!();
            }
        }
    }
}

/// Trait for tool runners.
#[async_trait]
pub trait ToolRunner: Send + Sync {
    /// Runs the tool with the given working directory and returns the
    /// captured result.
    async fn run(&self, working_dir: &Path) -> Result<ScriptResult>;
}

/// Runner for an external checker executable.
///
/// Invokes the program with no arguments and no shell, cwd set to the
/// fixture root, both output streams captured as text.
pub struct ScriptTool {
    /// Path to the executable.
    program: PathBuf,
    /// Maximum time the child may run before it is killed.
    timeout: Duration,
}

impl ScriptTool {
    /// Creates a runner for the given executable.
    pub fn new(program: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }
}

#[async_trait]
impl ToolRunner for ScriptTool {
    async fn run(&self, working_dir: &Path) -> Result<ScriptResult> {
        tracing::info!(
            program = %self.program.display(),
            working_dir = %working_dir.display(),
            "invoking tool"
        );

        let child = Command::new(&self.program)
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| Error::ToolSpawn {
                program: self.program.clone(),
                reason: e.to_string(),
            })?;

        let output = tokio::time::timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| Error::ToolTimeout {
                program: self.program.clone(),
                secs: self.timeout.as_secs(),
            })?
            .map_err(Error::Io)?;

        let result = ScriptResult {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        result.echo();

        tracing::debug!(
            exit_code = ?result.exit_code,
            stdout_bytes = result.stdout.len(),
            stderr_bytes = result.stderr.len(),
            "tool finished"
        );

        Ok(result)
    }
}
