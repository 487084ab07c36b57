//! Shared test utilities for conio-cli integration tests.

use assert_cmd::Command;

/// Get a Command for the conio binary.
///
/// The command is isolated from the user's color settings: `CONIO_COLOR`
/// and `NO_COLOR` are cleared and the config path points at a missing file.
///
/// # Panics
///
/// Panics if the conio binary cannot be found. This should not happen
/// in a properly configured test environment.
#[allow(deprecated)]
pub fn conio_cmd() -> Command {
    let mut cmd = Command::cargo_bin("conio").expect("conio binary should exist");
    cmd.env_remove("CONIO_COLOR")
        .env_remove("NO_COLOR")
        .env("CONIO_CONFIG", "/nonexistent/conio-test/config.yaml");
    cmd
}
