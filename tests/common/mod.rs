// Shared test helpers for integration tests
use std::fs;
use std::path::PathBuf;
use tempfile::{tempdir, TempDir};

/// Creates a sandbox directory for a test run.
pub fn sandbox() -> TempDir {
    tempdir().expect("Failed to create temporary directory")
}

/// Writes a buildspec with the given YAML content into the sandbox and
/// returns its path.
pub fn write_buildspec(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("buildspec.yml");
    fs::write(&path, content).expect("Failed to write buildspec.yml");
    path
}

/// Helper to create a buildspec whose `tests` key lists the given commands.
pub fn buildspec_with_commands(dir: &TempDir, commands: &[&str]) -> PathBuf {
    let mut content = String::from("tests:\n");
    for command in commands {
        content.push_str(&format!("  - \"{}\"\n", command.replace('"', "\\\"")));
    }
    write_buildspec(dir, &content)
}
