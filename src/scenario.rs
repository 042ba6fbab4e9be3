//! Scenario records: one expected-outcome case against one tool.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::expect::Expectation;

/// Which external tool a scenario exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    /// The cross-reference checker (locale, theme, packaging paths).
    Reference,
    /// The namespace/preprocessor structure checker.
    Namespace,
}

/// A single file mutation applied to a fixture before the tool runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mutation {
    /// Path relative to the fixture root.
    pub path: String,
    /// Literal file content (a trailing newline is appended if absent).
    pub content: String,
}

/// One verification case: mutations to apply, tool to run, outcome to expect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Scenario name, used in fixture directory names and logs.
    pub name: String,

    /// Which tool this scenario runs.
    pub tool: ToolKind,

    /// Mutations applied to the baseline fixture, in order.
    #[serde(default)]
    pub mutations: Vec<Mutation>,

    /// Expected exit code and stdout content.
    #[serde(default)]
    pub expect: Expectation,
}

impl Scenario {
    /// Creates a scenario with no mutations and the default (failure)
    /// expectation.
    pub fn new(name: impl Into<String>, tool: ToolKind) -> Self {
        Self {
            name: name.into(),
            tool,
            mutations: Vec::new(),
            expect: Expectation::default(),
        }
    }

    /// Adds a file mutation.
    pub fn with_mutation(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.mutations.push(Mutation {
            path: path.into(),
            content: content.into(),
        });
        self
    }

    /// Sets the expected outcome.
    pub fn with_expect(mut self, expect: Expectation) -> Self {
        self.expect = expect;
        self
    }

    /// Loads an ordered scenario list from a YAML file.
    pub fn load_list(path: impl AsRef<Path>) -> Result<Vec<Self>> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(Error::Io)?;

        serde_yaml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse scenario file: {}", e)))
    }
}
