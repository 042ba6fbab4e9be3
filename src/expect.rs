//! Expected-outcome checking for tool invocations.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::runner::ScriptResult;

fn default_exit_code() -> i32 {
    // Default posture: assume the tool found something wrong unless the
    // scenario explicitly expects a clean run.
    1
}

/// The expected outcome of one tool invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expectation {
    /// Expected process exit code.
    #[serde(default = "default_exit_code")]
    pub exit_code: i32,

    /// Blocks of text that must appear verbatim in captured stdout.
    /// Each entry may be a single line or a multi-line block.
    #[serde(default)]
    pub stdout_contains: Vec<String>,
}

impl Default for Expectation {
    fn default() -> Self {
        Self {
            exit_code: default_exit_code(),
            stdout_contains: Vec::new(),
        }
    }
}

impl Expectation {
    /// Creates an expectation for a failing tool run (exit code 1).
    pub fn failure() -> Self {
        Self::default()
    }

    /// Creates an expectation for a clean tool run (exit code 0).
    pub fn success() -> Self {
        Self {
            exit_code: 0,
            stdout_contains: Vec::new(),
        }
    }

    /// Adds a block of text that must appear in stdout.
    pub fn with_stdout(mut self, block: impl Into<String>) -> Self {
        self.stdout_contains.push(block.into());
        self
    }

    /// Checks the captured exit code against the expected one.
    pub fn check_exit_code(&self, result: &ScriptResult) -> Result<()> {
        match result.exit_code {
            Some(code) if code == self.exit_code => Ok(()),
            Some(code) => Err(Error::ExitCode {
                expected: self.exit_code,
                actual: code.to_string(),
            }),
            // Killed by a signal: never equal to any expected code.
            None => Err(Error::ExitCode {
                expected: self.exit_code,
                actual: "no exit code (terminated by signal)".to_string(),
            }),
        }
    }

    /// Checks that every expected block appears verbatim in stdout.
    pub fn check_stdout(&self, result: &ScriptResult) -> Result<()> {
        for block in &self.stdout_contains {
            if !result.stdout.contains(block.as_str()) {
                return Err(Error::MissingOutput {
                    expected: block.clone(),
                });
            }
        }
        Ok(())
    }

    /// Runs both checks. Either failing aborts with a descriptive error.
    pub fn check(&self, result: &ScriptResult) -> Result<()> {
        self.check_exit_code(result)?;
        self.check_stdout(result)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(exit_code: Option<i32>, stdout: &str) -> ScriptResult {
        ScriptResult {
            exit_code,
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }

    #[test]
    fn default_expectation_assumes_failure() {
        let expect = Expectation::default();
        assert_eq!(expect.exit_code, 1);
    }

    #[test]
    fn exit_code_mismatch_names_both_codes() {
        let expect = Expectation::success();
        let err = expect
            .check_exit_code(&result(Some(1), ""))
            .expect_err("mismatch must fail");
        let msg = err.to_string();
        assert!(msg.contains("expected exit code 0"));
        assert!(msg.contains('1'));
    }

    #[test]
    fn signal_termination_never_matches() {
        let expect = Expectation::failure();
        assert!(expect.check_exit_code(&result(None, "")).is_err());
    }

    #[test]
    fn multi_line_block_matches_contiguously() {
        let expect = Expectation::failure()
            .with_stdout("Error: a.h:1: First statement should be header guard\n1 errors");
        let out = result(
            Some(1),
            "Error: a.h:1: First statement should be header guard\n1 errors\n",
        );
        assert!(expect.check_stdout(&out).is_ok());

        // Same lines but not contiguous must not match
        let gap = result(
            Some(1),
            "Error: a.h:1: First statement should be header guard\nnoise\n1 errors\n",
        );
        assert!(expect.check_stdout(&gap).is_err());
    }

    #[test]
    fn missing_block_is_quoted_in_error() {
        let expect = Expectation::failure().with_stdout("2 errors");
        let err = expect
            .check_stdout(&result(Some(1), "1 errors\n"))
            .expect_err("absent block must fail");
        assert!(err.to_string().contains("2 errors"));
    }
}
