//! Validation orchestration.
//!
//! The [`run_validation`] function is the main entry-point for scoring
//! a skill directory. It reads the manifest (at most once), extracts
//! the frontmatter (at most once), runs all three check tiers
//! unconditionally, and assembles the final
//! [`ScoreReport`](crate::report::ScoreReport).

use crate::checks;
use crate::frontmatter;
use crate::report::ScoreReport;
use std::path::Path;

/// Scores a skill directory against the full 29-point checklist.
///
/// # Pipeline
///
/// 1. Read `SKILL.md` if present and readable.
/// 2. Extract the frontmatter fields and body.
/// 3. Run the [`critical`](crate::checks::critical),
///    [`structure`](crate::checks::structure), and
///    [`quality`](crate::checks::quality) tiers. Every tier runs even
///    when the manifest is missing — failures degrade to failing rows.
/// 4. Assemble the [`ScoreReport`] with derived totals.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
/// use skill_checklist::validate;
///
/// let report = validate::run_validation(Path::new("./my-skill"));
/// std::process::exit(if report.passed { 0 } else { 1 });
/// ```
pub fn run_validation(skill_dir: &Path) -> ScoreReport {
    let content = read_manifest(&skill_dir.join("SKILL.md"));
    let extraction = content.as_deref().map(frontmatter::extract);

    let critical = checks::critical::evaluate(skill_dir, extraction.as_ref());
    let structure = checks::structure::evaluate(skill_dir);

    let (body, description) = match extraction.as_ref() {
        Some(ex) => (
            ex.body,
            ex.fields
                .as_ref()
                .and_then(|f| f.description.as_deref())
                .unwrap_or(""),
        ),
        None => ("", ""),
    };
    let quality = checks::quality::evaluate(body, description);

    ScoreReport::from_tiers(skill_dir, critical, structure, quality)
}

/// Reads the manifest file, degrading absence and IO failure to `None`.
///
/// An existing-but-unreadable manifest gets a warning on stderr; this
/// is the only error the tool reports outside the checklist itself.
fn read_manifest(path: &Path) -> Option<String> {
    if !path.is_file() {
        return None;
    }
    match std::fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) => {
            eprintln!("Warning: cannot read {}: {e}", path.display());
            None
        }
    }
}
