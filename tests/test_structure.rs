use std::path::Path;

use skill_checklist::checks::structure;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn write_file(dir: &Path, rel: &str, content: &str) {
    let path = dir.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

// ---------------------------------------------------------------------------
// Empty directory
// ---------------------------------------------------------------------------

#[test]
fn empty_directory_fails_all_four_checks() {
    let dir = tempfile::tempdir().unwrap();
    let checks = structure::evaluate(dir.path());

    assert_eq!(checks.len(), 4);
    assert!(checks.iter().all(|c| !c.passed));
    assert_eq!(checks.iter().map(|c| c.max_points).sum::<u32>(), 7);

    let labels: Vec<&str> = checks.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(
        labels,
        [
            "references/ exists",
            "commands/ exists",
            ".claude-skill.json valid",
            "package.json valid",
        ]
    );
}

// ---------------------------------------------------------------------------
// references/ and commands/ markdown counting
// ---------------------------------------------------------------------------

#[test]
fn references_with_one_md_file_passes() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "references/overview.md", "# Overview\n");

    let checks = structure::evaluate(dir.path());
    assert!(checks[0].passed);
    assert_eq!(checks[0].points, 2);
    assert_eq!(checks[0].label, "references/ exists (1 files)");
}

#[test]
fn nested_md_files_are_counted_recursively() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "references/top.md", "top\n");
    write_file(dir.path(), "references/deep/nested/leaf.md", "leaf\n");

    let checks = structure::evaluate(dir.path());
    assert!(checks[0].passed);
    assert_eq!(checks[0].label, "references/ exists (2 files)");
}

#[test]
fn non_markdown_files_do_not_count() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "references/notes.txt", "not markdown\n");
    write_file(dir.path(), "commands/run.sh", "#!/bin/sh\n");

    let checks = structure::evaluate(dir.path());
    assert!(!checks[0].passed, "a .txt file must not satisfy references/");
    assert!(!checks[1].passed, "a .sh file must not satisfy commands/");
}

#[test]
fn commands_with_md_file_passes() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "commands/refactor.md", "# Command\n");

    let checks = structure::evaluate(dir.path());
    assert!(checks[1].passed);
    assert_eq!(checks[1].label, "commands/ exists (1 files)");
}

// ---------------------------------------------------------------------------
// .claude-skill.json
// ---------------------------------------------------------------------------

#[test]
fn skill_json_with_name_passes() {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        dir.path(),
        ".claude-skill.json",
        r#"{"name": "my-skill", "version": "1.0.0"}"#,
    );

    let checks = structure::evaluate(dir.path());
    assert!(checks[2].passed);
    assert_eq!(checks[2].points, 2);
}

#[test]
fn skill_json_without_name_fails() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), ".claude-skill.json", r#"{"version": "1.0.0"}"#);

    let checks = structure::evaluate(dir.path());
    assert!(!checks[2].passed);
}

#[test]
fn skill_json_null_name_still_counts_as_present() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), ".claude-skill.json", r#"{"name": null}"#);

    let checks = structure::evaluate(dir.path());
    assert!(checks[2].passed, "key presence is what matters, not its value");
}

#[test]
fn malformed_skill_json_is_a_normal_failure() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), ".claude-skill.json", "{not valid json");

    let checks = structure::evaluate(dir.path());
    assert_eq!(checks.len(), 4, "malformed JSON must not abort the tier");
    assert!(!checks[2].passed);
    assert_eq!(checks[2].points, 0);
}

// ---------------------------------------------------------------------------
// package.json
// ---------------------------------------------------------------------------

#[test]
fn package_json_with_name_and_version_passes() {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        dir.path(),
        "package.json",
        r#"{"name": "my-skill", "version": "0.1.0"}"#,
    );

    let checks = structure::evaluate(dir.path());
    assert!(checks[3].passed);
    assert_eq!(checks[3].points, 1);
}

#[test]
fn package_json_missing_version_fails() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "package.json", r#"{"name": "my-skill"}"#);

    let checks = structure::evaluate(dir.path());
    assert!(!checks[3].passed);
}

#[test]
fn package_json_missing_name_fails() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "package.json", r#"{"version": "0.1.0"}"#);

    let checks = structure::evaluate(dir.path());
    assert!(!checks[3].passed);
}
