//! Scenario driver.
//!
//! Owns the process-scoped temporary root, builds the shared stub
//! repository once, then runs scenarios strictly sequentially: fresh
//! fixture, mutations, one tool invocation, expectation checks, teardown.
//! The first failure aborts the run.

use tempfile::TempDir;

use crate::config::HarnessConfig;
use crate::error::Result;
use crate::fixture::Fixture;
use crate::repo::StubRepo;
use crate::runner::{ScriptTool, ToolRunner};
use crate::scenario::Scenario;

/// Top-level harness driving an ordered scenario list.
pub struct Harness {
    config: HarnessConfig,
}

impl Harness {
    /// Creates a harness with the given configuration.
    pub fn new(config: HarnessConfig) -> Self {
        Self { config }
    }

    /// Runs every scenario in declaration order, fail-fast.
    ///
    /// All fixtures live under one temporary root, so cleanup cascades even
    /// if an individual fixture removal fails. With `keep_fixtures` the
    /// root is persisted instead, so kept fixture trees survive the run
    /// for post-mortem inspection. Prints the success marker only when
    /// every scenario passed.
    pub async fn run(&self, scenarios: &[Scenario]) -> Result<()> {
        self.config.validate()?;

        let root = TempDir::new()?;
        let (root_path, _root_guard) = if self.config.keep_fixtures {
            let path = root.keep();
            tracing::info!(root = %path.display(), "keeping fixture root");
            println!("Keeping fixtures under {}", path.display());
            (path, None)
        } else {
            (root.path().to_path_buf(), Some(root))
        };

        let stub = StubRepo::create(&root_path)?;

        for (index, scenario) in scenarios.iter().enumerate() {
            println!();
            println!("{}", "=".repeat(60));
            println!("Scenario {}/{}: {}", index + 1, scenarios.len(), scenario.name);
            println!("{}", "=".repeat(60));

            self.run_scenario(scenario, &root_path, &stub).await?;

            tracing::info!(scenario = %scenario.name, "scenario passed");
        }

        println!();
        println!("{}", "=".repeat(60));
        println!("All {} scenarios passed", scenarios.len());
        println!("{}", "=".repeat(60));

        Ok(())
    }

    /// Runs one scenario against a fresh fixture.
    ///
    /// The fixture is dropped (and its tree removed) on every exit path,
    /// including expectation failures.
    async fn run_scenario(
        &self,
        scenario: &Scenario,
        root: &std::path::Path,
        stub: &StubRepo,
    ) -> Result<()> {
        let mut fixture = Fixture::create(root, &scenario.name, stub.path())?;
        if self.config.keep_fixtures {
            fixture.keep();
        }

        for mutation in &scenario.mutations {
            fixture.write_file(&mutation.path, &mutation.content)?;
        }

        let tool = ScriptTool::new(self.config.tool_path(scenario.tool), self.config.tool_timeout);
        let result = tool.run(fixture.path()).await?;

        scenario.expect.check(&result)
    }
}
