#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the csv-guard binary.
#[macro_export]
macro_rules! csv_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("csv-guard"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content and returns its path.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Creates a file from raw bytes and returns its path.
    pub fn create_binary_file(&self, relative_path: &str, content: &[u8]) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes [`METER_TEMPLATE`] as `meters.toml`.
    pub fn create_meter_template(&self) -> PathBuf {
        self.create_file("meters.toml", METER_TEMPLATE)
    }

    /// Writes [`UTILITY_TEMPLATE`] as `utility.toml`.
    pub fn create_utility_template(&self) -> PathBuf {
        self.create_file("utility.toml", UTILITY_TEMPLATE)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Single unique, length-limited identifier column.
pub const METER_TEMPLATE: &str = r#"
version = "1"
name = "meters"

[[columns]]
name = "MeterID"
required = true
unique = true
max_length = 10
notes = "Serial number printed on the meter"
"#;

/// Identifier plus a required, pattern-checked zone and typed columns.
pub const UTILITY_TEMPLATE: &str = r#"
version = "1"
name = "utility"

[[columns]]
name = "MeterID"
required = true
unique = true
max_length = 10

[[columns]]
name = "Zone"
required = true
pattern = "North|South|East|West"
pattern_description = "must be one of North, South, East, West"

[[columns]]
name = "Reading"
data_type = "number"

[[columns]]
name = "Installed"
data_type = "date"
"#;
