//! Isolated test environment and fluent command wrapper.

// Allow dead code since this is a test utility shared across test binaries
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary database.
///
/// Creates a temp directory that is automatically cleaned up on drop.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Path to the database file
    db_path: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("lore.db");
        Self {
            _temp_dir: temp_dir,
            db_path,
        }
    }

    /// Returns the path to the database file.
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Creates a LoreCommand configured for this test environment.
    pub fn cmd(&self) -> LoreCommand {
        LoreCommand::new().db(&self.db_path)
    }

    /// Adds an entry through the CLI and returns its id.
    pub fn add_entry(&self, title: &str, content: &str, category: &str) -> i64 {
        let value: serde_json::Value = self
            .cmd()
            .args([
                "add", title, content, "--category", category, "--format", "json",
            ])
            .output_json();
        value["data"]["id"].as_i64().expect("add output has an id")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Fluent wrapper around `assert_cmd::Command` for the `lore` binary.
pub struct LoreCommand {
    args: Vec<String>,
    stdin: Option<String>,
}

impl LoreCommand {
    /// Creates a new command for the `lore` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            stdin: None,
        }
    }

    /// Sets input piped to the command's stdin.
    pub fn stdin(mut self, input: &str) -> Self {
        self.stdin = Some(input.to_string());
        self
    }

    /// Sets the `--db` option to specify the database file.
    pub fn db(mut self, path: &Path) -> Self {
        self.args.push("--db".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("lore").expect("Failed to find lore binary");
        cmd.args(&self.args);
        if let Some(input) = &self.stdin {
            cmd.write_stdin(input.clone());
        }
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    /// Configures for the `ls` command.
    pub fn ls(self) -> Self {
        self.args(["ls"])
    }

    /// Configures for the `search` command with a keyword.
    pub fn search(self, keyword: &str) -> Self {
        self.args(["search", keyword])
    }

    /// Configures for the `show` command with an id.
    pub fn show(self, id: i64) -> Self {
        self.args(["show", &id.to_string()])
    }

    /// Configures for the `stats` command.
    pub fn stats(self) -> Self {
        self.args(["stats"])
    }
}

impl Default for LoreCommand {
    fn default() -> Self {
        Self::new()
    }
}
