//! Structure-tier checks.
//!
//! Four checks on companion directories and metadata files, evaluated
//! against the filesystem independently of the manifest content:
//!
//! | # | Label | Points | What it checks |
//! |---|-------|--------|----------------|
//! | 1 | `references/ exists` | 2 | ≥ 1 `.md` file at any depth |
//! | 2 | `commands/ exists` | 2 | ≥ 1 `.md` file at any depth |
//! | 3 | `.claude-skill.json valid` | 2 | parses as JSON, has `name` |
//! | 4 | `package.json valid` | 1 | parses as JSON, has `name` + `version` |
//!
//! Malformed JSON and IO errors are normal failing results, never
//! fatal. Passing directory checks embed the file count in the label,
//! e.g. `references/ exists (3 files)`.

use crate::checks::count_md_files;
use crate::report::CheckResult;
use serde_json::Value;
use std::path::Path;

/// Runs the four structure checks against `skill_dir`.
pub fn evaluate(skill_dir: &Path) -> Vec<CheckResult> {
    let mut checks = Vec::with_capacity(4);

    for (dir_name, points) in [("references", 2), ("commands", 2)] {
        let count = count_md_files(&skill_dir.join(dir_name));
        let label = if count > 0 {
            format!("{dir_name}/ exists ({count} files)")
        } else {
            format!("{dir_name}/ exists")
        };
        checks.push(CheckResult::scored(label, count > 0, points, ""));
    }

    let skill_json_valid = has_keys(&skill_dir.join(".claude-skill.json"), &["name"]);
    checks.push(CheckResult::scored(
        ".claude-skill.json valid",
        skill_json_valid,
        2,
        "",
    ));

    let package_json_valid = has_keys(&skill_dir.join("package.json"), &["name", "version"]);
    checks.push(CheckResult::scored(
        "package.json valid",
        package_json_valid,
        1,
        "",
    ));

    checks
}

/// Returns `true` when `path` parses as a JSON object carrying every
/// key in `keys`. Key presence is the whole test — a `null` value
/// still counts. IO and parse failures degrade to `false`.
fn has_keys(path: &Path, keys: &[&str]) -> bool {
    let Ok(content) = std::fs::read_to_string(path) else {
        return false;
    };
    let Ok(doc) = serde_json::from_str::<Value>(&content) else {
        return false;
    };
    keys.iter().all(|key| doc.get(key).is_some())
}
