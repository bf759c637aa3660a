//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - A small, hand-checked room snapshot
//! - Output parsing helpers

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Rooms written by [`TestEnv::write_rooms`].
///
/// Scan order matters for the combine command: the first available rooms
/// of each type are the ones returned.
pub const ROOMS_JSON: &str = r#"[
  { "roomId": "S1", "roomType": "Standard", "pricePerDay": 120.0, "isAvailable": true },
  { "roomId": "S2", "roomType": "Standard", "pricePerDay": 110.0, "isAvailable": false },
  { "roomId": "S3", "roomType": "Standard", "pricePerDay": 130.0, "isAvailable": true },
  { "roomId": "D1", "roomType": "Deluxe", "pricePerDay": 450.0, "isAvailable": true },
  { "roomId": "S4", "roomType": "Standard", "pricePerDay": 140.0, "isAvailable": true },
  { "roomId": "V1", "roomType": "VIP", "pricePerDay": 1500.0, "isAvailable": false }
]"#;

/// Test environment with isolated data directory.
///
/// Every command runs inside the temporary directory with `HOME` pointed
/// at it and all `ROOMFIT_*` variables cleared, so no configuration from
/// the machine running the tests leaks in.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the roomfit data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("roomfit-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// Get a bare command builder without pre-configured flags.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("roomfit").expect("Failed to find roomfit binary");
        cmd.current_dir(&self.temp_path)
            .env("HOME", &self.temp_path)
            .env_remove("ROOMFIT_ROOMS_FILE")
            .env_remove("ROOMFIT_DATA_DIR")
            .env_remove("ROOMFIT_MAX_STEPS")
            .env_remove("ROOMFIT_TIME_LIMIT_MS")
            .env_remove("ROOMFIT_SEED")
            .env_remove("ROOMFIT_OUTPUT_FORMAT")
            .env_remove("ROOMFIT_LOG_MODE");
        cmd
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Get a command builder with the data directory and the standard
    /// rooms file pre-configured.
    pub fn command_with_rooms(&self) -> Command {
        let rooms = self.write_rooms();
        let mut cmd = self.command();
        cmd.arg("--rooms").arg(rooms);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write [`ROOMS_JSON`] to `rooms.json` and return its path.
    pub fn write_rooms(&self) -> PathBuf {
        self.write_file("rooms.json", ROOMS_JSON)
    }

    /// Write a file under the temporary directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a command's stdout as JSON.
#[allow(dead_code)]
pub fn parse_json(stdout: &[u8]) -> serde_json::Value {
    serde_json::from_slice(stdout).expect("Output is not valid JSON")
}
