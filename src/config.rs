//! Harness configuration.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::scenario::ToolKind;

fn default_tool_timeout() -> Duration {
    Duration::from_secs(60)
}

/// Configuration for a harness run.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Path to the reference checker executable.
    pub reference_checker: PathBuf,
    /// Path to the namespace/preprocessor checker executable.
    pub namespace_checker: PathBuf,
    /// Timeout applied to each tool invocation.
    pub tool_timeout: Duration,
    /// Keep fixture directories after the run (debugging aid).
    pub keep_fixtures: bool,
}

impl HarnessConfig {
    /// Creates a configuration for the given tool executables.
    pub fn new(reference_checker: impl Into<PathBuf>, namespace_checker: impl Into<PathBuf>) -> Self {
        Self {
            reference_checker: reference_checker.into(),
            namespace_checker: namespace_checker.into(),
            tool_timeout: default_tool_timeout(),
            keep_fixtures: false,
        }
    }

    /// Sets the per-invocation tool timeout.
    pub fn with_tool_timeout(mut self, timeout: Duration) -> Self {
        self.tool_timeout = timeout;
        self
    }

    /// Sets whether fixture directories are kept after the run.
    pub fn with_keep_fixtures(mut self, keep: bool) -> Self {
        self.keep_fixtures = keep;
        self
    }

    /// Returns the executable path for the given tool kind.
    pub fn tool_path(&self, kind: ToolKind) -> &PathBuf {
        match kind {
            ToolKind::Reference => &self.reference_checker,
            ToolKind::Namespace => &self.namespace_checker,
        }
    }

    /// Validates that both tool executables exist.
    pub fn validate(&self) -> Result<()> {
        for path in [&self.reference_checker, &self.namespace_checker] {
            if !path.exists() {
                return Err(Error::Config(format!(
                    "tool executable not found: {}",
                    path.display()
                )));
            }
        }
        Ok(())
    }
}
