//! Shared stub submodule-target repository.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::fixture::run_git;

/// A minimal git repository used as the submodule target for every fixture.
///
/// Built once per run under the harness temp root, then read-only: fixtures
/// reference it by path but never write into it. It lives inside the temp
/// root, so the run's single top-level cleanup removes it too.
pub struct StubRepo {
    /// Root of the stub repository.
    path: PathBuf,
}

impl StubRepo {
    /// Creates the stub repository under `parent` with one commit.
    pub fn create(parent: &Path) -> Result<Self> {
        let path = parent.join("stub-repo");
        std::fs::create_dir_all(&path)?;

        tracing::info!(stub = %path.display(), "building shared stub repository");

        run_git(&path, &["init", "--initial-branch=master"])?;
        run_git(&path, &["config", "user.name", "Hygiene Harness"])?;
        run_git(&path, &["config", "user.email", "harness@example.invalid"])?;

        std::fs::write(path.join("README.md"), "# Stub submodule target\n")?;
        run_git(&path, &["add", "README.md"])?;
        run_git(
            &path,
            &["-c", "commit.gpgsign=false", "commit", "-m", "Stub repository"],
        )?;

        Ok(Self { path })
    }

    /// Returns the stub repository root.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
