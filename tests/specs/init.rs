//! Specs for `skillsift init`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

#[test]
fn writes_default_config() {
    let (mut cmd, dir) = skillsift_cmd();
    cmd.args(["init"]).assert().success();

    let written = std::fs::read_to_string(dir.path().join("skillsift.toml")).unwrap();
    assert!(written.contains("[match]"));
    assert!(written.contains("boundary_anchoring = true"));
}

#[test]
fn refuses_to_overwrite_without_force() {
    let (_, dir) = skillsift_cmd();
    std::fs::write(dir.path().join("skillsift.toml"), "# mine\n").unwrap();

    skillsift_in(dir.path())
        .args(["init"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));

    let kept = std::fs::read_to_string(dir.path().join("skillsift.toml")).unwrap();
    assert_eq!(kept, "# mine\n");
}

#[test]
fn force_overwrites_existing_config() {
    let (_, dir) = skillsift_cmd();
    std::fs::write(dir.path().join("skillsift.toml"), "# mine\n").unwrap();

    skillsift_in(dir.path()).args(["init", "--force"]).assert().success();

    let written = std::fs::read_to_string(dir.path().join("skillsift.toml")).unwrap();
    assert!(written.contains("[match]"));
}

#[test]
fn generated_config_is_loadable_by_classify() {
    let (_, dir) = skillsift_cmd();
    skillsift_in(dir.path()).args(["init"]).assert().success();

    skillsift_in(dir.path())
        .args(["classify", "python", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TECHNICAL.PROGRAMMING.PYTHON_ECOSYSTEM"));
}
