//! Error types for the hygiene harness.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for harness operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A git command returned non-zero during fixture construction.
    #[error("git {args} failed in {}: {stderr}", .dir.display())]
    Git {
        args: String,
        dir: PathBuf,
        stderr: String,
    },

    /// IO error while building or mutating a fixture.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The tool executable could not be spawned.
    #[error("failed to spawn tool {}: {reason}", .program.display())]
    ToolSpawn { program: PathBuf, reason: String },

    /// The tool did not exit within the configured timeout.
    #[error("tool {} timed out after {secs} seconds", .program.display())]
    ToolTimeout { program: PathBuf, secs: u64 },

    /// The tool exited with a different code than the scenario expected.
    #[error("expected exit code {expected}, tool exited with {actual}")]
    ExitCode { expected: i32, actual: String },

    /// An expected block of output was not found in captured stdout.
    #[error("expected output not found in stdout:\n{expected}")]
    MissingOutput { expected: String },

    /// Harness configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for harness operations.
pub type Result<T> = std::result::Result<T, Error>;
