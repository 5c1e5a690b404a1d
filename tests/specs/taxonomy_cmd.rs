//! Specs for `skillsift taxonomy`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

#[test]
fn lists_builtin_categories_with_alias_counts() {
    let (mut cmd, _dir) = skillsift_cmd();
    cmd.args(["taxonomy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TECHNICAL.PROGRAMMING.C_CPP: 4 aliases"))
        .stdout(predicate::str::contains("76 categories"))
        .stdout(predicate::str::contains("708 unique aliases"));
}

#[test]
fn aliases_flag_lists_every_alias() {
    let (mut cmd, _dir) = skillsift_cmd();
    cmd.args(["taxonomy", "--aliases", "--category", "TECHNICAL.PROGRAMMING.GO"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TECHNICAL.PROGRAMMING.GO"))
        .stdout(predicate::str::contains("  golang"))
        .stdout(predicate::str::contains("  go"));
}

#[test]
fn category_prefix_filters_the_listing() {
    let (mut cmd, _dir) = skillsift_cmd();
    cmd.args(["taxonomy", "--category", "NON_TECHNICAL"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NON_TECHNICAL.BUSINESS"))
        .stdout(predicate::str::contains("TECHNICAL.PROGRAMMING").not());
}

#[test]
fn json_output_includes_paths_and_aliases() {
    let (mut cmd, _dir) = skillsift_cmd();
    let output = cmd
        .args(["taxonomy", "--aliases", "-o", "json", "--category", "TECHNICAL.BACKEND.AUTH"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let categories = value["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0]["path"], "TECHNICAL.BACKEND.AUTH");
    let aliases = categories[0]["aliases"].as_array().unwrap();
    assert!(aliases.iter().any(|a| a == "oauth"));
}

#[test]
fn validates_a_custom_taxonomy_file() {
    let (mut cmd, dir) = skillsift_cmd();
    let taxonomy = dir.path().join("bad.yaml");
    std::fs::write(&taxonomy, "A:\n  B: {}\n").unwrap();

    cmd.args(["taxonomy", "--taxonomy"])
        .arg(&taxonomy)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("A.B"));
}

#[test]
fn reports_pattern_errors_with_alias_and_path() {
    let (mut cmd, dir) = skillsift_cmd();
    let taxonomy = dir.path().join("bad_pattern.json");
    std::fs::write(&taxonomy, r#"{"A": {"B": ["c\\+["]}}"#).unwrap();

    cmd.args(["taxonomy", "--taxonomy"])
        .arg(&taxonomy)
        .assert()
        .code(2)
        .stderr(predicate::str::contains(r"c\+["))
        .stderr(predicate::str::contains("A.B"));
}
