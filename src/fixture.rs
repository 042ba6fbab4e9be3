//! Disposable git-tracked project fixtures.
//!
//! A fixture is a fresh git repository seeded with a minimal, internally
//! consistent project skeleton: one namespaced source file, a localization
//! file whose single entry points at it, debian-style packaging stubs and a
//! submodule reference to the shared stub repository. Scenarios mutate the
//! working tree from this committed baseline before the tool runs.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Error, Result};

/// Relative path of the baseline source file.
pub const SOURCE_PATH: &str = "src/core/Song.cpp";

/// Relative path of the baseline localization file.
pub const LOCALE_PATH: &str = "data/locale/en.ts";

/// Relative path of the baseline theme stylesheet.
pub const THEME_PATH: &str = "data/themes/default/style.css";

/// Minimal class declaration inside the project's root namespace.
///
/// The locale baseline records (file, line) for the `class Song` line, so
/// the line layout here is load-bearing.
const BASELINE_SOURCE: &str = r#"#include "Song.h"

namespace lmms {

class Song
{
};

} // namespace lmms
"#;

/// One valid translatable string located at `class Song` (line 5) of the
/// baseline source, path relative to the locale directory.
const BASELINE_LOCALE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="en">
<context>
    <name>lmms::Song</name>
    <message>
        <location filename="../../src/core/Song.cpp" line="5"/>
        <source>Song</source>
        <translation>Song</translation>
    </message>
</context>
</TS>
"#;

/// One valid namespaced class selector.
const BASELINE_THEME: &str = r#"lmms--Song {
    color: #ffffff;
}
"#;

/// Runs a git command in `dir`, surfacing stderr verbatim on failure.
///
/// Fixture construction treats any git failure as fatal: a broken baseline
/// must never silently proceed to a scenario.
pub(crate) fn run_git(dir: &Path, args: &[&str]) -> Result<()> {
    let output = Command::new("git")
        .current_dir(dir)
        .args(args)
        .output()
        .map_err(Error::Io)?;

    if !output.status.success() {
        return Err(Error::Git {
            args: args.join(" "),
            dir: dir.to_path_buf(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    Ok(())
}

/// A disposable git-tracked fixture directory.
///
/// The directory is an explicit value threaded into every git call and tool
/// invocation; the process working directory is never changed. The tree is
/// removed recursively on drop, on every exit path.
pub struct Fixture {
    /// Root of the fixture tree.
    path: PathBuf,
    /// Whether to keep the tree on drop (debugging aid).
    keep: bool,
}

impl Fixture {
    /// Builds a fresh baseline fixture under `parent`.
    ///
    /// `name` is the scenario name, sanitized into the directory name along
    /// with a short unique suffix. `stub_repo` is the shared submodule
    /// target; it must outlive the run.
    pub fn create(parent: &Path, name: &str, stub_repo: &Path) -> Result<Self> {
        let short_uuid = uuid::Uuid::new_v4().to_string();
        let sanitized: String = name
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '-' })
            .collect::<String>()
            .to_lowercase();
        let dir_name = format!("{}-{}", sanitized, &short_uuid[..8]);
        let path = parent.join(dir_name);

        std::fs::create_dir_all(&path).map_err(Error::Io)?;

        tracing::info!(fixture = %path.display(), "building fixture");

        let fixture = Self { path, keep: false };
        fixture.build_baseline(stub_repo)?;
        Ok(fixture)
    }

    /// Returns the fixture root directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Keeps the fixture tree on drop.
    pub fn keep(&mut self) {
        self.keep = true;
    }

    /// Writes `content` to `rel_path` (parents created, overwrite allowed,
    /// non-empty content terminated by a newline) and stages it. Empty
    /// content produces an empty file, as the packaging stubs require.
    /// Does not commit: the tools under test operate on the working tree.
    pub fn write_file(&self, rel_path: &str, content: &str) -> Result<()> {
        let full = self.path.join(rel_path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).map_err(Error::Io)?;
        }

        let mut text = content.to_string();
        if !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
        std::fs::write(&full, text).map_err(Error::Io)?;

        run_git(&self.path, &["add", rel_path])
    }

    /// Seeds and commits the baseline project skeleton.
    fn build_baseline(&self, stub_repo: &Path) -> Result<()> {
        let root = self.path.as_path();

        run_git(root, &["init", "--initial-branch=master"])?;

        // Fixed synthetic identity, local to this repository only.
        run_git(root, &["config", "user.name", "Hygiene Harness"])?;
        run_git(root, &["config", "user.email", "harness@example.invalid"])?;

        self.write_file(SOURCE_PATH, BASELINE_SOURCE)?;
        self.write_file(LOCALE_PATH, BASELINE_LOCALE)?;
        self.write_file(THEME_PATH, BASELINE_THEME)?;

        // Packaging-metadata skeleton: two empty stubs and the patch queue.
        self.write_file("debian/docs", "")?;
        self.write_file("debian/copyright", "")?;
        self.write_file("debian/patches/series", "")?;

        // Local-path submodule targets need the file protocol allowed
        // per-invocation on modern git.
        let stub = stub_repo.to_string_lossy();
        run_git(
            root,
            &[
                "-c",
                "protocol.file.allow=always",
                "submodule",
                "add",
                stub.as_ref(),
                "plugins/stub",
            ],
        )?;

        run_git(
            root,
            &[
                "-c",
                "commit.gpgsign=false",
                "commit",
                "-m",
                "Baseline project skeleton",
            ],
        )
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        if self.keep {
            tracing::info!(fixture = %self.path.display(), "keeping fixture tree");
            return;
        }
        if let Err(e) = std::fs::remove_dir_all(&self.path) {
            tracing::warn!(
                fixture = %self.path.display(),
                error = %e,
                "failed to remove fixture tree"
            );
        }
    }
}
