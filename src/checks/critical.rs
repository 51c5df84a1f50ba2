//! Critical-tier checks.
//!
//! Five checks on the manifest itself, 3 points each (max 15):
//!
//! | # | Label | What it checks |
//! |---|-------|----------------|
//! | 1 | `SKILL.md exists` | manifest file present in the skill root |
//! | 2 | `Valid YAML frontmatter` | leading `---` block extracted |
//! | 3 | `name field valid` | non-empty, `^[a-z0-9-]+$`, ≤ 64 chars |
//! | 4 | `description field valid` | non-empty, ≤ 1024 chars |
//! | 5 | `Body non-empty` | content after the block is not blank |
//!
//! When no manifest content could be read at all, checks 2–5 are
//! recorded as failing placeholders so the row count stays fixed.

use crate::frontmatter::Extraction;
use crate::report::CheckResult;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Maximum length of the `name` field, in characters.
pub const MAX_NAME_LEN: usize = 64;

/// Maximum length of the `description` field, in characters.
pub const MAX_DESC_LEN: usize = 1024;

const POINTS_EACH: u32 = 3;

/// Skill names are lowercase-kebab-case: lowercase letters, digits,
/// and hyphens only.
static RE_NAME_FORMAT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").unwrap());

/// Runs the five critical checks.
///
/// `manifest` is `None` when `SKILL.md` was missing or unreadable; in
/// that case checks 2–5 fail without attempting extraction.
pub fn evaluate(skill_dir: &Path, manifest: Option<&Extraction<'_>>) -> Vec<CheckResult> {
    let mut checks = Vec::with_capacity(5);

    let exists = skill_dir.join("SKILL.md").is_file();
    checks.push(CheckResult::scored(
        "SKILL.md exists",
        exists,
        POINTS_EACH,
        "",
    ));

    let Some(extraction) = manifest else {
        checks.push(CheckResult::scored(
            "Valid YAML frontmatter",
            false,
            POINTS_EACH,
            "No content to parse",
        ));
        checks.push(CheckResult::scored(
            "name field valid",
            false,
            POINTS_EACH,
            "",
        ));
        checks.push(CheckResult::scored(
            "description field valid",
            false,
            POINTS_EACH,
            "",
        ));
        checks.push(CheckResult::scored("Body non-empty", false, POINTS_EACH, ""));
        return checks;
    };

    let fields = extraction.fields.as_ref();

    let fm_valid = fields.is_some();
    let fm_detail = if fm_valid {
        ""
    } else {
        "No YAML frontmatter found"
    };
    checks.push(CheckResult::scored(
        "Valid YAML frontmatter",
        fm_valid,
        POINTS_EACH,
        fm_detail,
    ));

    let name = fields.and_then(|f| f.name.as_deref()).unwrap_or("");
    let name_valid =
        !name.is_empty() && RE_NAME_FORMAT.is_match(name) && name.chars().count() <= MAX_NAME_LEN;
    let name_detail = if name_valid {
        format!(": {name}")
    } else {
        String::new()
    };
    checks.push(CheckResult::scored(
        "name field valid",
        name_valid,
        POINTS_EACH,
        name_detail,
    ));

    let desc = fields.and_then(|f| f.description.as_deref()).unwrap_or("");
    let desc_valid = !desc.is_empty() && desc.chars().count() <= MAX_DESC_LEN;
    checks.push(CheckResult::scored(
        "description field valid",
        desc_valid,
        POINTS_EACH,
        "",
    ));

    // When extraction found no block, `body` is the entire document.
    let body_valid = !extraction.body.trim().is_empty();
    checks.push(CheckResult::scored(
        "Body non-empty",
        body_valid,
        POINTS_EACH,
        "",
    ));

    checks
}
