//! The three checklist tiers.
//!
//! Each tier module exposes an `evaluate` function returning its fixed
//! set of [`CheckResult`](crate::report::CheckResult) rows:
//!
//! - **[`critical`]** — manifest presence and frontmatter validity
//!   (5 checks, 3 points each).
//! - **[`structure`]** — companion directories and metadata files
//!   (4 checks, 2+2+2+1 points).
//! - **[`quality`]** — content heuristics over body and description
//!   (4 checks, 2+2+2+1 points).
//!
//! Evaluation never short-circuits: broken or missing input produces
//! failing rows, not fewer rows.

pub mod critical;
pub mod quality;
pub mod structure;

use std::path::Path;
use walkdir::WalkDir;

/// Recursively counts Markdown files under `dir`.
///
/// Walks the tree at any depth and counts every regular file whose name
/// ends in the literal `.md` suffix. A missing or unreadable directory
/// counts as zero.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
/// use skill_checklist::checks::count_md_files;
///
/// let n = count_md_files(Path::new("./my-skill/references"));
/// ```
pub fn count_md_files(dir: &Path) -> usize {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".md"))
        .count()
}

/// Formats a count with `,` thousands separators.
///
/// # Examples
///
/// ```
/// use skill_checklist::checks::group_thousands;
///
/// assert_eq!(group_thousands(999), "999");
/// assert_eq!(group_thousands(5000), "5,000");
/// assert_eq!(group_thousands(1234567), "1,234,567");
/// ```
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
