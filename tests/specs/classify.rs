//! Specs for `skillsift classify`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

#[test]
fn inline_text_reports_categories() {
    let (mut cmd, _dir) = skillsift_cmd();
    cmd.args(["classify", "I love C++ programming", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TECHNICAL.PROGRAMMING.C_CPP"));
}

#[test]
fn literal_alias_reaches_the_same_category_as_the_regex() {
    let (mut cmd, _dir) = skillsift_cmd();
    cmd.args(["classify", "cpp", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TECHNICAL.PROGRAMMING.C_CPP"));
}

#[test]
fn repeated_aliases_are_counted() {
    let (mut cmd, _dir) = skillsift_cmd();
    cmd.args(["classify", "git git git", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TECHNICAL.DEVOPS.VERSION_CONTROL: 3"))
        .stdout(predicate::str::contains("TECHNICAL.DEVOPS.DEVOPS_GENERAL: 3"));
}

#[test]
fn cross_listed_alias_credits_both_categories() {
    let (mut cmd, _dir) = skillsift_cmd();
    cmd.args(["classify", "oauth", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TECHNICAL.BACKEND.AUTH: 1"))
        .stdout(predicate::str::contains("TECHNICAL.SECURITY.IDENTITY: 1"));
}

#[test]
fn boundary_anchoring_prevents_substring_hits() {
    let (mut cmd, _dir) = skillsift_cmd();
    cmd.args(["classify", "javascript", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("JAVASCRIPT_TYPESCRIPT"))
        .stdout(predicate::str::contains("TECHNICAL.PROGRAMMING.GO").not())
        .stdout(predicate::str::contains("JAVA_ECOSYSTEM").not());
}

#[test]
fn no_match_exits_nonzero_with_marker() {
    let (mut cmd, _dir) = skillsift_cmd();
    cmd.args(["classify", "the quick brown fox", "--no-color"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("(no matches)"));
}

#[test]
fn stdin_is_classified_when_no_input_is_given() {
    let (mut cmd, _dir) = skillsift_cmd();
    cmd.args(["classify", "--no-color"])
        .write_stdin("python and django experience")
        .assert()
        .success()
        .stdout(predicate::str::contains("stdin"))
        .stdout(predicate::str::contains("TECHNICAL.PROGRAMMING.PYTHON_ECOSYSTEM"));
}

#[test]
fn json_output_carries_counts_and_provenance() {
    let (mut cmd, _dir) = skillsift_cmd();
    let output = cmd
        .args(["classify", "oauth and jwt", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let input = &value["inputs"][0];
    assert_eq!(input["source"], "text#1");

    let paths: Vec<&str> = input["categories"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|c| c["path"].as_str())
        .collect();
    assert!(paths.contains(&"TECHNICAL.BACKEND.AUTH"));
    assert!(paths.contains(&"TECHNICAL.SECURITY.IDENTITY"));

    let first = &input["matches"][0];
    assert!(first["alias"].is_string());
    assert!(first["start"].is_u64());
    assert!(first["end"].is_u64());
}

#[test]
fn files_are_classified_per_input() {
    let (mut cmd, dir) = skillsift_cmd();
    let posting = dir.path().join("posting.txt");
    std::fs::write(&posting, "kubernetes and docker").unwrap();

    cmd.args(["classify", "--no-color", "-f"])
        .arg(&posting)
        .assert()
        .success()
        .stdout(predicate::str::contains("posting.txt"))
        .stdout(predicate::str::contains("TECHNICAL.CLOUD.CLOUD_GENERAL: 2"));
}

#[test]
fn directory_walks_classify_matching_documents() {
    let (mut cmd, dir) = skillsift_cmd();
    std::fs::write(dir.path().join("a.txt"), "terraform and ansible").unwrap();
    std::fs::write(dir.path().join("b.md"), "react and vue").unwrap();
    std::fs::write(dir.path().join("ignored.rs"), "python").unwrap();

    cmd.args(["classify", "--no-color", "--dir", "."])
        .assert()
        .success()
        .stdout(predicate::str::contains("a.txt"))
        .stdout(predicate::str::contains("TECHNICAL.DEVOPS.INFRA_AS_CODE: 2"))
        .stdout(predicate::str::contains("b.md"))
        .stdout(predicate::str::contains("TECHNICAL.FRONTEND.FRAMEWORKS: 2"))
        .stdout(predicate::str::contains("ignored.rs").not());
}

#[test]
fn min_hits_filters_sparse_categories() {
    let (mut cmd, _dir) = skillsift_cmd();
    cmd.args(["classify", "python go python", "--min-hits", "2", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PYTHON_ECOSYSTEM: 2"))
        .stdout(predicate::str::contains("TECHNICAL.PROGRAMMING.GO").not());
}

#[test]
fn presence_mode_omits_counts() {
    let (mut cmd, _dir) = skillsift_cmd();
    cmd.args(["classify", "oauth", "--presence", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TECHNICAL.BACKEND.AUTH\n"))
        .stdout(predicate::str::contains(": 1").not());
}

#[test]
fn matches_flag_shows_spans() {
    let (mut cmd, _dir) = skillsift_cmd();
    cmd.args(["classify", "oauth", "--matches", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("matches:"))
        .stdout(predicate::str::contains("oauth [0..5]"));
}

#[test]
fn custom_taxonomy_file_replaces_the_builtin() {
    let (mut cmd, dir) = skillsift_cmd();
    let taxonomy = dir.path().join("custom.json");
    std::fs::write(&taxonomy, r#"{"TOOLS": {"EDITORS": ["vim", "emacs"]}}"#).unwrap();

    cmd.args(["classify", "vim or emacs", "--no-color", "--taxonomy"])
        .arg(&taxonomy)
        .assert()
        .success()
        .stdout(predicate::str::contains("TOOLS.EDITORS: 2"));
}

#[test]
fn config_file_taxonomy_path_is_relative_to_config() {
    let (mut cmd, dir) = skillsift_cmd();
    std::fs::write(
        dir.path().join("skillsift.toml"),
        "[taxonomy]\npath = \"custom.yaml\"\n",
    )
    .unwrap();
    std::fs::write(dir.path().join("custom.yaml"), "TOOLS:\n  EDITORS:\n    - vim\n").unwrap();

    cmd.args(["classify", "vim", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TOOLS.EDITORS: 1"));
}

#[test]
fn malformed_taxonomy_fails_with_config_error() {
    let (mut cmd, dir) = skillsift_cmd();
    let taxonomy = dir.path().join("bad.json");
    std::fs::write(&taxonomy, r#"{"A": {"B": "python"}}"#).unwrap();

    cmd.args(["classify", "python", "--taxonomy"])
        .arg(&taxonomy)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("A.B"));
}

#[test]
fn empty_stdin_reports_no_matches() {
    let (mut cmd, _dir) = skillsift_cmd();
    cmd.args(["classify", "--no-color"])
        .write_stdin("")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("(no matches)"));
}
