//! Common test utilities for CLI testing.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::{tempdir, TempDir};

const CLEARED_VARS: &[&str] = &[
    "FOLIO_CONFIG",
    "FOLIO_ENV",
    "FOLIO_VISIBLE_PAGE_NUMBERS",
    "FOLIO_DEFAULT_ROWS_PER_PAGE",
    "FOLIO_MAX_ROWS_PER_PAGE",
    "FOLIO_PAGE_PARAM",
    "FOLIO_SIZE_PARAM",
    "FOLIO_LOG_LEVEL",
    "FOLIO_LOG_FILE",
    "RUST_LOG",
];

/// Test context with a temporary working directory
pub struct TestContext {
    pub temp_dir: TempDir,
    pub config_path: PathBuf,
}

impl TestContext {
    pub fn new() -> Self {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("folio.yaml");

        Self {
            temp_dir,
            config_path,
        }
    }

    /// Write `folio.yaml` into the temp directory
    pub fn with_config(self, config: &str) -> Self {
        std::fs::write(&self.config_path, config).expect("Failed to write config");
        self
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// A `folio` command running in the temp directory with a clean environment
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("folio").expect("Binary not found");
        cmd.current_dir(self.path());
        for var in CLEARED_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Like [`command`](Self::command) with `--config` pointing at `folio.yaml`
    pub fn command_with_config(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("--config").arg(&self.config_path);
        cmd
    }
}
