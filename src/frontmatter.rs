//! SKILL.md frontmatter extraction.
//!
//! A skill manifest may begin with a `---`-delimited metadata block.
//! Only two fields are recognized — `name` and `description` — so a
//! narrow pattern-matching extractor is used instead of a full YAML
//! crate. Anything the patterns below do not match is simply absent;
//! extraction never fails.
//!
//! `description` supports two forms:
//!
//! - **inline**: `description: does useful things`
//! - **block**: `description: >` (or `|`) followed by indented
//!   continuation lines, which are whitespace-collapsed and joined
//!   with single spaces. The block form takes precedence.
//!
//! Surrounding whitespace and leading/trailing quote characters are
//! stripped from inline values.

use regex::Regex;
use std::sync::LazyLock;

/// Whole-document pattern: opening delimiter line, metadata block,
/// closing delimiter line — all before any other content.
static RE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^---\s*\n(.*?)\n---\s*\n").unwrap());

/// `name: value` on a single line.
static RE_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^name:\s*(.+)$").unwrap());

/// Block-literal description: `description: >` or `description: |`
/// followed by indented continuation lines.
static RE_DESC_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^description:\s*[>|]\s*\n((?:\s+.+\n?)*)").unwrap());

/// Inline description: `description: value` on a single line.
static RE_DESC_INLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^description:\s*(.+)$").unwrap());

/// The recognized frontmatter fields.
///
/// Absence of a field (`None`) is distinct from a present-but-empty
/// value (`Some("")`), which the block form can produce.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Result of running [`extract`] over a manifest document.
#[derive(Debug)]
pub struct Extraction<'a> {
    /// Extracted fields, or `None` when the document does not begin
    /// with a frontmatter block.
    pub fields: Option<FrontMatter>,
    /// Everything after the closing delimiter line. When no block was
    /// found this is the entire original document.
    pub body: &'a str,
}

/// Extracts the frontmatter fields and body from `content`.
///
/// Total function: a document without a leading delimiter block yields
/// `fields: None` with the full text as body. Re-extracting a returned
/// body is a no-op — the body never starts with a delimiter block of
/// its own.
///
/// # Examples
///
/// ```
/// use skill_checklist::frontmatter::extract;
///
/// let doc = "---\nname: my-skill\ndescription: Does things\n---\n# Body\n";
/// let ex = extract(doc);
/// let fields = ex.fields.unwrap();
/// assert_eq!(fields.name.as_deref(), Some("my-skill"));
/// assert_eq!(ex.body, "# Body\n");
/// ```
pub fn extract(content: &str) -> Extraction<'_> {
    let Some(m) = RE_BLOCK.captures(content) else {
        return Extraction {
            fields: None,
            body: content,
        };
    };

    let block = m.get(1).map_or("", |g| g.as_str());
    let body = &content[m.get(0).map_or(0, |g| g.end())..];

    let name = RE_NAME
        .captures(block)
        .and_then(|c| c.get(1))
        .map(|g| strip_quotes(g.as_str()));

    // Block form first; only fall back to the inline form when no
    // block-literal marker matched.
    let description = match RE_DESC_BLOCK.captures(block).and_then(|c| c.get(1)) {
        Some(g) => Some(collapse_whitespace(g.as_str())),
        None => RE_DESC_INLINE
            .captures(block)
            .and_then(|c| c.get(1))
            .map(|g| strip_quotes(g.as_str())),
    };

    Extraction {
        fields: Some(FrontMatter { name, description }),
        body,
    }
}

/// Trims surrounding whitespace, then any leading/trailing run of
/// single or double quote characters.
fn strip_quotes(value: &str) -> String {
    value
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .to_string()
}

/// Collapses all whitespace runs (including newlines) to single spaces.
fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
