//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates::prelude::*;
use assert_cmd::Command;

/// Returns a Command configured to run the skillsift binary from a fresh
/// temporary working directory, so no surrounding config is picked up.
pub fn skillsift_in(dir: &std::path::Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("skillsift"));
    cmd.current_dir(dir);
    cmd
}

/// Command plus its owned temporary working directory.
pub fn skillsift_cmd() -> (Command, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("tempdir");
    let cmd = skillsift_in(dir.path());
    (cmd, dir)
}
