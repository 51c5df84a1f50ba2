//! Quality-tier checks.
//!
//! Four heuristics over the manifest body and description text:
//!
//! | # | Label | Points | What it checks |
//! |---|-------|--------|----------------|
//! | 1 | `Auto-invocation section present` | 2 | body matches `auto…invoc` |
//! | 2 | `Dual keywords in description` | 2 | natural AND technical keyword |
//! | 3 | `Token count` | 2 | estimated tokens strictly < 5,000 |
//! | 4 | `Description length` | 1 | strictly > 50 characters |
//!
//! The token estimate is a cheap size proxy — character count divided
//! by four — not a real tokenization. Checks 3 and 4 embed the measured
//! value and comparison direction in the label.

use crate::checks::group_thousands;
use crate::report::CheckResult;
use regex::Regex;
use std::sync::LazyLock;

/// Estimated token budget for the manifest body (exclusive).
pub const MAX_TOKENS: usize = 5000;

/// Minimum description length, in characters (exclusive).
pub const MIN_DESC_LEN: usize = 50;

/// Plain-language terms a discoverable description should contain.
const NATURAL_KEYWORDS: &[&str] = &[
    "refactor", "clean up", "improve", "fix", "simplify", "messy", "complex", "debt", "quality",
];

/// Engineering vocabulary that signals a technically grounded description.
const TECHNICAL_KEYWORDS: &[&str] = &[
    "code smell",
    "complexity",
    "coupling",
    "cohesion",
    "duplication",
    "dry",
    "pattern",
];

/// "Auto-Invocation", "automatic invocation", and similar phrasings.
static RE_AUTO_INVOCATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)auto.*invoc").unwrap());

/// Runs the four quality checks.
///
/// `body` is the manifest text after the frontmatter block (or the
/// whole document when no block was found); `description` is the
/// extracted frontmatter field. Both are empty strings when the
/// manifest could not be read.
pub fn evaluate(body: &str, description: &str) -> Vec<CheckResult> {
    let mut checks = Vec::with_capacity(4);

    let auto_present = RE_AUTO_INVOCATION.is_match(body);
    checks.push(CheckResult::scored(
        "Auto-invocation section present",
        auto_present,
        2,
        "",
    ));

    let desc_lower = description.to_lowercase();
    let has_natural = NATURAL_KEYWORDS.iter().any(|kw| desc_lower.contains(kw));
    let has_technical = TECHNICAL_KEYWORDS.iter().any(|kw| desc_lower.contains(kw));
    checks.push(CheckResult::scored(
        "Dual keywords in description",
        has_natural && has_technical,
        2,
        "",
    ));

    let token_count = body.chars().count() / 4;
    let token_ok = token_count < MAX_TOKENS;
    let token_label = format!(
        "Token count: {} ({} {})",
        group_thousands(token_count),
        if token_ok { "<" } else { ">" },
        group_thousands(MAX_TOKENS),
    );
    checks.push(CheckResult::scored(token_label, token_ok, 2, ""));

    let desc_len = description.chars().count();
    let desc_ok = desc_len > MIN_DESC_LEN;
    let desc_label = format!(
        "Description length: {desc_len} chars ({} {MIN_DESC_LEN})",
        if desc_ok { ">" } else { "<=" },
    );
    checks.push(CheckResult::scored(desc_label, desc_ok, 1, ""));

    checks
}
