//! # skill-checklist
//!
//! Checklist validation for AI agent skill packages.
//!
//! `skill-checklist` scores a skill directory against a fixed 29-point
//! rubric: manifest presence and frontmatter validity, companion
//! directories and metadata files, and content-quality heuristics. It
//! prints a tiered report and exits with a pass/fail status code.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use skill_checklist::{output, validate};
//!
//! let report = validate::run_validation(Path::new("./my-skill"));
//! print!("{}", output::format_report(&report));
//!
//! std::process::exit(if report.passed { 0 } else { 1 });
//! ```
//!
//! ## Architecture
//!
//! The crate is organized around a pipeline:
//!
//! 1. **[`frontmatter`]** — extract the `name` and `description` fields
//!    and the body from the `SKILL.md` metadata block.
//! 2. **[`checks`]** — the three check tiers ([`checks::critical`],
//!    [`checks::structure`], [`checks::quality`]).
//! 3. **[`validate`]** — orchestrate the tiers and collect results.
//! 4. **[`report`]** — core data types ([`report::CheckResult`],
//!    [`report::ScoreReport`]).
//! 5. **[`output`]** — format the report as colored terminal text.
//!
//! ## Checks
//!
//! | Tier | Checks | Points |
//! |------|--------|--------|
//! | Critical  | manifest exists, frontmatter parses, name, description, body | 5 × 3 |
//! | Structure | `references/`, `commands/`, `.claude-skill.json`, `package.json` | 2+2+2+1 |
//! | Quality   | auto-invocation section, dual keywords, token budget, description length | 2+2+2+1 |
//!
//! Every check always yields exactly one result row — broken or missing
//! input degrades to failing rows, so the report is always 13 rows
//! summing to a maximum of 29 points. The run passes at 24 points.

pub mod checks;
pub mod frontmatter;
pub mod output;
pub mod report;
pub mod validate;
