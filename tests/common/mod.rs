//! Shared test fixtures and utilities for integration tests.
//!
//! # Available Fixtures
//!
//! - `hash_facts`: the `core::hash::Hash` implementors of a small documentation build
//! - `workspace`: an empty temporary directory that is removed on drop

use rstest::fixture;
use rustdoc_implementors::{Config, ImplementedType, ImplementorFact};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary workspace directory for test isolation.
#[allow(dead_code)] // Methods used across different integration test crates
pub struct TempWorkspace {
    _temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl TempWorkspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Creates a file with the given content, creating parent directories.
    ///
    /// # Panics
    /// Panics if file creation fails.
    pub fn create_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("Failed to create parent directory for '{}': {}", path, e)
            });
        }
        std::fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("Failed to write file '{}': {}", path, e));
        full_path
    }

    /// Config that writes `relative_output` inside this workspace.
    pub fn config(&self, relative_output: &str) -> Config {
        Config {
            output: self.root.join(relative_output),
            ..Config::default()
        }
    }
}

#[fixture]
pub fn workspace() -> TempWorkspace {
    TempWorkspace::new()
}

#[fixture]
pub fn hash_facts() -> Vec<ImplementorFact> {
    vec![
        ImplementorFact::new(
            "aho_corasick",
            ImplementedType::struct_named("Match"),
            "Hash",
            "core::hash",
        ),
        ImplementorFact::new("log", ImplementedType::enum_named("LogLevel"), "Hash", "core::hash"),
        ImplementorFact::new(
            "log",
            ImplementedType::struct_named("LogMetadata"),
            "Hash",
            "core::hash",
        )
        .with_generic_params(["'a"]),
        ImplementorFact::new(
            "robots",
            ImplementedType::enum_named("ActorPath").in_module("actors::actor_ref"),
            "Hash",
            "core::hash",
        ),
        ImplementorFact::new(
            "robots",
            ImplementedType::struct_named("Counter"),
            "Actor",
            "robots::actors",
        ),
    ]
}
