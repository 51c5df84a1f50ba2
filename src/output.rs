//! Human-readable colored report formatter.
//!
//! Renders a [`ScoreReport`] as terminal text: a header with the target
//! directory and timestamp, one section per tier with `[PASS]`/`[FAIL]`
//! rows, and a score footer with the overall verdict. Status tokens are
//! ANSI-colored; the literal text is unchanged when colors are disabled.

use crate::report::{CheckResult, ScoreReport};
use colored::Colorize;

const SEPARATOR: &str = "===========================================================";
const LABEL_WIDTH: usize = 45;

/// Formats a [`ScoreReport`] as the tiered checklist report.
///
/// Sections rendered (in order):
/// 1. **Header** — title, target directory, timestamp.
/// 2. **Tiers** — `CRITICAL`, `STRUCTURE`, `QUALITY`, one row per check.
/// 3. **Footer** — total score, percentage, and PASS/FAIL verdict.
pub fn format_report(report: &ScoreReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("\n{SEPARATOR}\n"));
    out.push_str(&format!("{}\n", "SKILL VALIDATION RESULTS".bold()));
    out.push_str(&format!("{SEPARATOR}\n"));
    out.push_str(&format!("Target:    {}\n", report.skill_dir.display()));
    out.push_str(&format!("Generated: {}\n\n", report.generated_at));

    for (tier, checks) in report.tiers() {
        out.push_str(&format!("{}:\n", tier.header()));
        for check in checks {
            out.push_str(&format_row(check));
        }
        out.push('\n');
    }

    let verdict = if report.passed {
        "PASS".green().bold().to_string()
    } else {
        "FAIL".red().bold().to_string()
    };

    out.push_str(&format!("{SEPARATOR}\n"));
    out.push_str(&format!(
        "SCORE: {}/{} ({}%) -- {verdict}\n",
        report.score,
        report.max_score,
        report.percentage(),
    ));
    out.push_str(&format!("{SEPARATOR}\n"));

    out
}

fn format_row(check: &CheckResult) -> String {
    let status = if check.passed {
        "PASS".green().to_string()
    } else {
        "FAIL".red().to_string()
    };

    // Pad the plain label, not the colored status — ANSI escapes would
    // break the column width.
    format!(
        "  [{status}]  {label:<LABEL_WIDTH$} ({points}/{max})\n",
        label = check.label,
        points = check.points,
        max = check.max_points,
    )
}
