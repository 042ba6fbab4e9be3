//! Hygiene harness - verification harness for repository hygiene check scripts.
//!
//! Builds disposable git-repository fixtures seeded with a minimal valid
//! project skeleton, injects known violations, invokes an external checker
//! executable against each fixture and asserts its exit code and diagnostic
//! output against an expected contract.

pub mod config;
pub mod error;
pub mod expect;
pub mod fixture;
pub mod harness;
pub mod repo;
pub mod runner;
pub mod scenario;
pub mod suite;

pub use config::HarnessConfig;
pub use error::{Error, Result};
pub use expect::Expectation;
pub use fixture::Fixture;
pub use harness::Harness;
pub use repo::StubRepo;
pub use runner::{ScriptResult, ScriptTool, ToolRunner};
pub use scenario::{Mutation, Scenario, ToolKind};
