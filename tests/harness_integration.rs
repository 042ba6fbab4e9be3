//! Integration tests for the full harness loop.
//!
//! These tests use local temp repos and fake checker executables written as
//! shell scripts, suitable for CI. They require `git` on PATH.

#![cfg(unix)]

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use hygiene_harness::{Error, Expectation, Harness, HarnessConfig, Scenario, ToolKind};

/// Writes an executable shell script into `dir` and returns its path.
fn write_tool(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("failed to write tool script");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .expect("failed to chmod tool script");
    path
}

/// A config whose two tools are the given scripts.
fn config_for(reference: &Path, namespace: &Path) -> HarnessConfig {
    HarnessConfig::new(reference, namespace)
}

#[tokio::test]
async fn clean_tools_pass_scenarios_for_both_kinds() {
    let tools = TempDir::new().unwrap();
    let clean = write_tool(tools.path(), "clean-check", "echo '0 errors'\nexit 0");

    let scenarios = vec![
        Scenario::new("reference baseline", ToolKind::Reference)
            .with_expect(Expectation::success().with_stdout("0 errors")),
        Scenario::new("namespace baseline", ToolKind::Namespace)
            .with_expect(Expectation::success().with_stdout("0 errors")),
    ];

    let harness = Harness::new(config_for(&clean, &clean));
    harness.run(&scenarios).await.expect("clean run must pass");
}

#[tokio::test]
async fn tool_sees_committed_baseline_in_fixture_root() {
    let tools = TempDir::new().unwrap();
    // Fails unless invoked with cwd = fixture root and the baseline present.
    let probe = write_tool(
        tools.path(),
        "probe-check",
        "test -f src/core/Song.cpp || exit 2\n\
         test -f data/locale/en.ts || exit 2\n\
         test -f .gitmodules || exit 2\n\
         echo '0 errors'\nexit 0",
    );

    let scenarios = vec![Scenario::new("baseline probe", ToolKind::Reference)
        .with_expect(Expectation::success().with_stdout("0 errors"))];

    let harness = Harness::new(config_for(&probe, &probe));
    harness.run(&scenarios).await.expect("baseline must be visible to the tool");
}

#[tokio::test]
async fn mutations_are_applied_before_the_tool_runs() {
    let tools = TempDir::new().unwrap();
    let echo_docs = write_tool(
        tools.path(),
        "docs-check",
        "cat debian/docs\necho '1 errors'\nexit 1",
    );

    let scenarios = vec![Scenario::new("docs mutation", ToolKind::Reference)
        .with_mutation("debian/docs", "/plugins/caps.html")
        .with_expect(
            Expectation::failure()
                .with_stdout("/plugins/caps.html")
                .with_stdout("1 errors"),
        )];

    let harness = Harness::new(config_for(&echo_docs, &echo_docs));
    harness.run(&scenarios).await.expect("mutated content must reach the tool");
}

#[tokio::test]
async fn exit_code_mismatch_fails_the_run() {
    let tools = TempDir::new().unwrap();
    let failing = write_tool(tools.path(), "failing-check", "echo '1 errors'\nexit 1");

    let scenarios = vec![Scenario::new("expects clean", ToolKind::Reference)
        .with_expect(Expectation::success().with_stdout("0 errors"))];

    let harness = Harness::new(config_for(&failing, &failing));
    let err = harness
        .run(&scenarios)
        .await
        .expect_err("mismatched exit code must fail");
    assert!(matches!(err, Error::ExitCode { .. }), "got: {err}");
}

#[tokio::test]
async fn missing_expected_output_fails_and_quotes_the_expectation() {
    let tools = TempDir::new().unwrap();
    let clean = write_tool(tools.path(), "clean-check", "echo '0 errors'\nexit 0");

    let scenarios = vec![Scenario::new("expects diagnostic", ToolKind::Reference)
        .with_expect(
            Expectation::success()
                .with_stdout("Error: debian/docs: Path does not exist: /plugins/caps.html"),
        )];

    let harness = Harness::new(config_for(&clean, &clean));
    let err = harness
        .run(&scenarios)
        .await
        .expect_err("absent diagnostic must fail");
    assert!(
        err.to_string().contains("Path does not exist: /plugins/caps.html"),
        "error must quote the missing expectation, got: {err}"
    );
}

#[tokio::test]
async fn run_aborts_on_first_failing_scenario() {
    let tools = TempDir::new().unwrap();
    let marker = tools.path().join("second-scenario-ran");
    let failing = write_tool(tools.path(), "failing-check", "echo '1 errors'\nexit 1");
    let touching = write_tool(
        tools.path(),
        "touching-check",
        &format!("touch {}\necho '0 errors'\nexit 0", marker.display()),
    );

    let scenarios = vec![
        Scenario::new("fails first", ToolKind::Reference)
            .with_expect(Expectation::success().with_stdout("0 errors")),
        Scenario::new("never reached", ToolKind::Namespace)
            .with_expect(Expectation::success().with_stdout("0 errors")),
    ];

    let harness = Harness::new(config_for(&failing, &touching));
    harness
        .run(&scenarios)
        .await
        .expect_err("first scenario must abort the run");

    assert!(
        !marker.exists(),
        "second scenario ran despite fail-fast contract"
    );
}

#[tokio::test]
async fn hung_tool_surfaces_a_timeout_error() {
    use std::time::Duration;

    let tools = TempDir::new().unwrap();
    let hung = write_tool(tools.path(), "hung-check", "sleep 60");

    let scenarios = vec![Scenario::new("hangs", ToolKind::Reference)
        .with_expect(Expectation::success())];

    let config = config_for(&hung, &hung).with_tool_timeout(Duration::from_millis(300));
    let harness = Harness::new(config);

    let err = harness
        .run(&scenarios)
        .await
        .expect_err("hung tool must time out");
    assert!(matches!(err, Error::ToolTimeout { .. }), "got: {err}");
}

#[tokio::test]
async fn kept_fixtures_survive_the_run() {
    let tools = TempDir::new().unwrap();
    let clean = write_tool(tools.path(), "clean-check", "echo '0 errors'\nexit 0");

    // Unique per test process so leftovers from other runs cannot match.
    let scenario_name = format!("keepcheck{}", std::process::id());
    let scenarios = vec![Scenario::new(&scenario_name, ToolKind::Reference)
        .with_expect(Expectation::success().with_stdout("0 errors"))];

    let config = config_for(&clean, &clean).with_keep_fixtures(true);
    let harness = Harness::new(config);
    harness.run(&scenarios).await.expect("clean run must pass");

    // The fixture directory lives one level below the persisted root in the
    // system temp directory and is named after the scenario.
    let mut kept_roots = Vec::new();
    for entry in std::fs::read_dir(std::env::temp_dir()).unwrap().flatten() {
        let root = entry.path();
        if !root.is_dir() {
            continue;
        }
        let Ok(children) = std::fs::read_dir(&root) else {
            continue;
        };
        for child in children.flatten() {
            let name = child.file_name().to_string_lossy().into_owned();
            if name.starts_with(&scenario_name) {
                kept_roots.push(root.clone());
            }
        }
    }

    assert!(
        !kept_roots.is_empty(),
        "keep_fixtures=true but no fixture directory survived the run"
    );

    for root in kept_roots {
        let _ = std::fs::remove_dir_all(root);
    }
}

#[tokio::test]
async fn scenarios_load_from_yaml_and_run() {
    let tools = TempDir::new().unwrap();
    let clean = write_tool(tools.path(), "clean-check", "echo '0 errors'\nexit 0");

    let scenario_file = tools.path().join("scenarios.yaml");
    std::fs::write(
        &scenario_file,
        r#"
- name: yaml baseline
  tool: reference
  expect:
    exit_code: 0
    stdout_contains:
      - "0 errors"
"#,
    )
    .unwrap();

    let scenarios = Scenario::load_list(&scenario_file).expect("yaml must parse");
    assert_eq!(scenarios.len(), 1);

    let harness = Harness::new(config_for(&clean, &clean));
    harness.run(&scenarios).await.expect("yaml scenario must pass");
}
