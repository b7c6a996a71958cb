use crate::common::{dir_with_files, extgroup, stdout_of, touch};
use std::fs;

#[test]
fn groups_example_directory() {
    let dir = dir_with_files(&["a.txt", "b.txt", "c.md", "noext"]);
    let out = stdout_of(extgroup().arg(dir.path()));
    assert_eq!(out, ":\n- noext\n\nmd:\n- c.md\n\ntxt:\n- a.txt\n- b.txt\n\n");
}

#[test]
fn output_is_identical_across_runs() {
    let dir = dir_with_files(&["z.c", "a.cpp", "m.c", "Makefile", "b.h", "A.c"]);
    let first = stdout_of(extgroup().arg(dir.path()));
    let second = stdout_of(extgroup().arg(dir.path()));
    assert_eq!(first, second);
    assert_eq!(
        first,
        ":\n- Makefile\n\nc:\n- A.c\n- m.c\n- z.c\n\ncpp:\n- a.cpp\n\nh:\n- b.h\n\n"
    );
}

#[test]
fn only_last_suffix_counts() {
    let dir = dir_with_files(&["archive.tar.gz", "plain.tar"]);
    let out = stdout_of(extgroup().arg(dir.path()));
    assert_eq!(out, "gz:\n- archive.tar.gz\n\ntar:\n- plain.tar\n\n");
}

#[test]
fn hidden_files_are_skipped_by_default() {
    let dir = dir_with_files(&[".env", "a.txt", "b.txt"]);
    let out = stdout_of(extgroup().arg(dir.path()));
    assert_eq!(out, "txt:\n- a.txt\n- b.txt\n\n");
}

#[test]
fn include_hidden_adds_dotfiles_to_empty_group() {
    let dir = dir_with_files(&[".env", "a.txt", "b.txt", ".gitignore"]);
    let out = stdout_of(extgroup().arg("--include-hidden").arg(dir.path()));
    assert_eq!(out, ":\n- .env\n- .gitignore\n\ntxt:\n- a.txt\n- b.txt\n\n");
}

#[test]
fn only_subdirectories_reports_no_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();
    touch(&dir.path().join("src"), "lib.rs");

    extgroup()
        .arg("--include-hidden")
        .arg(dir.path())
        .assert()
        .success()
        .stdout("No files found in the directory.\n");
}

#[cfg(unix)]
#[test]
fn symlinks_are_never_listed() {
    let dir = dir_with_files(&["real.txt"]);
    std::os::unix::fs::symlink(dir.path().join("real.txt"), dir.path().join("alias.txt")).unwrap();
    std::os::unix::fs::symlink(dir.path(), dir.path().join(".self")).unwrap();

    let out = stdout_of(extgroup().arg("--include-hidden").arg(dir.path()));
    assert_eq!(out, "txt:\n- real.txt\n\n");
}

#[test]
fn verbose_prints_settings_and_totals() {
    let dir = dir_with_files(&["a.txt", "b.txt", "c.md"]);
    let out = stdout_of(extgroup().arg(dir.path()).arg("-v"));
    let expected = format!(
        "Scanning directory: {}\nInclude hidden files: false\n\
         md:\n- c.md\nTotal files: 1\n\ntxt:\n- a.txt\n- b.txt\nTotal files: 2\n\n",
        dir.path().display()
    );
    assert_eq!(out, expected);
}

#[test]
fn last_directory_argument_wins() {
    let first = dir_with_files(&["first.rs"]);
    let second = dir_with_files(&["second.py"]);
    let out = stdout_of(extgroup().arg(first.path()).arg(second.path()));
    assert_eq!(out, "py:\n- second.py\n\n");
}

#[test]
fn json_output_matches_text_ordering() {
    let dir = dir_with_files(&["b.txt", "a.txt", "README"]);
    let out = stdout_of(
        extgroup()
            .args(["--format", "json", "--verbose"])
            .arg(dir.path()),
    );
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    let groups = value.as_array().unwrap();

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0]["extension"], "");
    assert_eq!(groups[0]["files"], serde_json::json!(["README"]));
    assert_eq!(groups[1]["label"], "txt");
    assert_eq!(groups[1]["files"], serde_json::json!(["a.txt", "b.txt"]));
    assert_eq!(groups[1]["count"], 2);
}

#[test]
fn directory_named_like_an_option_is_scanned() {
    let parent = tempfile::tempdir().unwrap();
    fs::create_dir(parent.path().join("-x")).unwrap();
    touch(&parent.path().join("-x"), "a.txt");

    let out = stdout_of(extgroup().current_dir(parent.path()).arg("-x"));
    assert_eq!(out, "txt:\n- a.txt\n\n");
}

#[test]
fn unknown_option_overwrites_earlier_directory() {
    let parent = tempfile::tempdir().unwrap();
    fs::create_dir(parent.path().join("--weird")).unwrap();
    touch(&parent.path().join("--weird"), "w.log");
    let other = dir_with_files(&["ignored.rs"]);

    let out = stdout_of(
        extgroup()
            .current_dir(parent.path())
            .arg(other.path())
            .args(["--weird", "-v"]),
    );
    assert!(out.ends_with("log:\n- w.log\nTotal files: 1\n\n"), "{out}");
    assert!(!out.contains("ignored.rs"));
}
