//! Core data types for checklist results.
//!
//! A validation run produces exactly 13 [`CheckResult`] rows grouped
//! into three fixed tiers, assembled into a [`ScoreReport`] by
//! [`ScoreReport::from_tiers`].

use std::path::{Path, PathBuf};

/// Minimum total score for a skill to pass validation.
pub const PASS_THRESHOLD: u32 = 24;

/// A single checklist row.
///
/// Points are all-or-nothing: a passing check is awarded its full
/// `max_points`, a failing check is awarded zero. Results are created
/// once by the check functions and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// Human-readable check label shown in the report.
    pub label: String,
    /// Whether the check passed.
    pub passed: bool,
    /// Points awarded (`max_points` or `0`).
    pub points: u32,
    /// Maximum points this check is worth.
    pub max_points: u32,
    /// Supplementary context (parse error, extracted value). Kept on the
    /// result for programmatic consumers; not rendered in the report.
    pub detail: String,
}

impl CheckResult {
    /// Builds a result worth `max_points`, awarding them only on pass.
    pub fn scored(
        label: impl Into<String>,
        passed: bool,
        max_points: u32,
        detail: impl Into<String>,
    ) -> Self {
        CheckResult {
            label: label.into(),
            passed,
            points: if passed { max_points } else { 0 },
            max_points,
            detail: detail.into(),
        }
    }
}

/// The three fixed checklist tiers, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Critical,
    Structure,
    Quality,
}

impl Tier {
    /// Section header used in the report.
    pub fn header(&self) -> &'static str {
        match self {
            Tier::Critical => "CRITICAL",
            Tier::Structure => "STRUCTURE",
            Tier::Quality => "QUALITY",
        }
    }
}

/// Aggregated outcome of a full validation run.
#[derive(Debug)]
pub struct ScoreReport {
    /// Absolute path of the validated skill directory.
    pub skill_dir: PathBuf,
    /// RFC 3339 timestamp of when the run happened.
    pub generated_at: String,
    /// The five critical-tier results.
    pub critical: Vec<CheckResult>,
    /// The four structure-tier results.
    pub structure: Vec<CheckResult>,
    /// The four quality-tier results.
    pub quality: Vec<CheckResult>,
    /// Total points awarded across all tiers.
    pub score: u32,
    /// Maximum achievable points (fixed at 29 for the full checklist).
    pub max_score: u32,
    /// `true` when `score >= PASS_THRESHOLD`.
    pub passed: bool,
}

impl ScoreReport {
    /// Assembles a report from the three tiers and derives the totals.
    pub fn from_tiers(
        skill_dir: &Path,
        critical: Vec<CheckResult>,
        structure: Vec<CheckResult>,
        quality: Vec<CheckResult>,
    ) -> Self {
        // Single pass over all rows for both sums.
        let (score, max_score) = critical
            .iter()
            .chain(&structure)
            .chain(&quality)
            .fold((0, 0), |(s, m), c| (s + c.points, m + c.max_points));

        ScoreReport {
            skill_dir: skill_dir.to_path_buf(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            critical,
            structure,
            quality,
            score,
            max_score,
            passed: score >= PASS_THRESHOLD,
        }
    }

    /// Tiers in report order, paired with their results.
    pub fn tiers(&self) -> [(Tier, &[CheckResult]); 3] {
        [
            (Tier::Critical, self.critical.as_slice()),
            (Tier::Structure, self.structure.as_slice()),
            (Tier::Quality, self.quality.as_slice()),
        ]
    }

    /// All 13 results in report order.
    pub fn all_checks(&self) -> impl Iterator<Item = &CheckResult> {
        self.critical
            .iter()
            .chain(&self.structure)
            .chain(&self.quality)
    }

    /// Score as a percentage of the maximum, rounded to the nearest
    /// integer. Returns 0 when the maximum is zero.
    pub fn percentage(&self) -> u32 {
        if self.max_score == 0 {
            return 0;
        }
        (self.score as f64 / self.max_score as f64 * 100.0).round() as u32
    }
}
