use crate::common::extgroup;
use predicates::prelude::*;

#[test]
fn missing_directory_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing");

    extgroup()
        .arg(&missing)
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("missing"))
        .stderr(predicate::str::starts_with("Error:"));
}

#[test]
fn regular_file_is_not_a_directory() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("notes.txt");
    std::fs::write(&file, "").unwrap();

    extgroup()
        .arg(&file)
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("cannot open directory"));
}

#[test]
fn unknown_option_is_scanned_as_a_directory() {
    let dir = tempfile::tempdir().unwrap();

    extgroup()
        .current_dir(dir.path())
        .arg("--no-such-flag")
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("--no-such-flag"));
}

#[test]
fn invalid_format_value_is_a_usage_error() {
    extgroup()
        .args(["--format", "yaml"])
        .assert()
        .failure()
        .code(2);
}
