//! Hygiene harness CLI.
//!
//! Runs the built-in scenario catalogue against the two checker
//! executables given on the command line.

use std::path::PathBuf;
use std::time::Duration;

use hygiene_harness::{suite, Harness, HarnessConfig, Scenario};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: {} <reference-checker> <namespace-checker>", args[0]);
        eprintln!("\nRuns the built-in verification scenarios against both checkers.");
        eprintln!("\nEnvironment variables:");
        eprintln!("  HARNESS_SCENARIOS=<file>   Load scenarios from a YAML file instead");
        eprintln!("  HARNESS_TIMEOUT_SECS=<n>   Per-invocation tool timeout (default: 60)");
        eprintln!("  HARNESS_KEEP_FIXTURES=1    Keep fixture directories for inspection");
        std::process::exit(1);
    }

    let mut config = HarnessConfig::new(&args[1], &args[2]);

    if let Ok(secs) = std::env::var("HARNESS_TIMEOUT_SECS") {
        match secs.parse::<u64>() {
            Ok(secs) => config = config.with_tool_timeout(Duration::from_secs(secs)),
            Err(_) => {
                eprintln!("Invalid HARNESS_TIMEOUT_SECS: {}", secs);
                std::process::exit(1);
            }
        }
    }

    if std::env::var("HARNESS_KEEP_FIXTURES").map(|v| v == "1").unwrap_or(false) {
        config = config.with_keep_fixtures(true);
    }

    let scenarios = match std::env::var("HARNESS_SCENARIOS") {
        Ok(path) => match Scenario::load_list(PathBuf::from(&path)) {
            Ok(scenarios) => {
                tracing::info!(file = %path, count = scenarios.len(), "loaded scenario file");
                scenarios
            }
            Err(e) => {
                eprintln!("Failed to load scenarios from {}: {}", path, e);
                std::process::exit(1);
            }
        },
        Err(_) => suite::builtin(),
    };

    let harness = Harness::new(config);

    if let Err(e) = harness.run(&scenarios).await {
        eprintln!("Harness failed: {}", e);
        std::process::exit(1);
    }
}
