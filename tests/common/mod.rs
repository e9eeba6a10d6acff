//! Common test utilities and helpers

use assertdiff::commands::{execute_command, Outcome};
use assertdiff::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test fixture manager for creating temporary input files
pub struct TestFixture {
    pub temp_dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    /// Get the root path of the test fixture
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a table file from rows of cells joined with `separator`
    pub fn create_table(&self, name: &str, data: &[Vec<&str>], separator: &str) -> Result<PathBuf> {
        let content = data
            .iter()
            .map(|row| row.join(separator))
            .collect::<Vec<_>>()
            .join("\n");
        self.create_raw(name, &content)
    }

    /// Create a JSON file with sample data
    pub fn create_json(&self, name: &str, data: &serde_json::Value) -> Result<PathBuf> {
        let content = serde_json::to_string_pretty(data)?;
        self.create_raw(name, &content)
    }

    /// Create a file with raw string content
    pub fn create_raw(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.root().join(name);
        fs::write(&path, content)?;
        Ok(path)
    }
}

/// Helper for running CLI commands in tests
pub struct CliTestRunner {
    fixture: TestFixture,
}

impl CliTestRunner {
    pub fn new() -> Result<Self> {
        Ok(Self {
            fixture: TestFixture::new()?,
        })
    }

    pub fn fixture(&self) -> &TestFixture {
        &self.fixture
    }

    /// Run an assertdiff command and return the outcome
    pub fn run_command(&self, args: &[&str]) -> Result<Outcome> {
        use assertdiff::cli::Cli;
        use clap::Parser;

        let mut cmd_args = vec!["assertdiff"];
        cmd_args.extend(args);

        let cli = Cli::try_parse_from(cmd_args)
            .map_err(|e| assertdiff::AssertdiffError::invalid_input(e.to_string()))?;
        execute_command(cli.command)
    }

    /// Run a command and expect the inputs to compare equal
    pub fn expect_equal(&self, args: &[&str]) {
        let outcome = self.run_command(args).expect("Command should succeed");
        assert_eq!(outcome, Outcome::Equal, "Inputs should compare equal");
    }

    /// Run a command and expect a reported difference
    pub fn expect_different(&self, args: &[&str]) {
        let outcome = self.run_command(args).expect("Command should succeed");
        assert_eq!(outcome, Outcome::Different, "Inputs should differ");
    }

    /// Run a command and expect it to fail
    pub fn expect_failure(&self, args: &[&str]) -> assertdiff::AssertdiffError {
        self.run_command(args).expect_err("Command should fail")
    }
}

/// Path argument as a string slice
pub fn arg(path: &Path) -> &str {
    path.to_str().expect("Temp paths are valid UTF-8")
}

/// Sample data generators for testing
pub mod sample_data {
    use serde_json::json;

    pub fn simple_table() -> Vec<Vec<&'static str>> {
        vec![
            vec!["id", "name", "price"],
            vec!["1", "Apple", "1.50"],
            vec!["2", "Banana", "0.75"],
            vec!["3", "Cherry", "2.00"],
        ]
    }

    pub fn reordered_table() -> Vec<Vec<&'static str>> {
        vec![
            vec!["id", "name", "price"],
            vec!["3", "Cherry", "2"],
            vec!["1", "Apple", "1.5"],
            vec!["2", "Banana", "0.75"],
        ]
    }

    pub fn updated_table() -> Vec<Vec<&'static str>> {
        vec![
            vec!["id", "name", "price"],
            vec!["1", "Apple", "1.60"],
            vec!["2", "Banana", "0.75"],
            vec!["3", "Cherry", "2.00"],
        ]
    }

    pub fn orders_json() -> serde_json::Value {
        json!({
            "generatedAt": "2024-05-01T10:00:00Z",
            "orders": [
                {"id": 1, "product": {"name": "Apple", "price": 1.50}, "tags": ["fresh"]},
                {"id": 2, "product": {"name": "Banana", "price": 0.75}, "tags": ["tropical"]}
            ]
        })
    }

    pub fn orders_json_reordered() -> serde_json::Value {
        json!({
            "orders": [
                {"product": {"price": 0.75, "name": "Banana"}, "id": 2, "tags": ["tropical"]},
                {"id": 1, "tags": ["fresh"], "product": {"name": "Apple", "price": 1.5}}
            ],
            "generatedAt": "2024-06-01T08:30:00Z"
        })
    }
}
