// Cached regex patterns for inline span conversion.
//
// Patterns run against text that has already been HTML-escaped, so `<`, `>`
// and `"` only ever come from tags produced by earlier rewriting steps.

use std::sync::LazyLock;

use regex::Regex;

/// `` `code` ``, no nested backticks.
pub(crate) static CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]*)`").unwrap());

/// `**strong**`
pub(crate) static STRONG_STAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]*)\*\*").unwrap());

/// `__strong__`. Intraword matches are filtered out by the caller.
pub(crate) static STRONG_UNDERSCORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__([^_]*)__").unwrap());

/// `*emphasis*`
pub(crate) static EM_STAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*([^*]*)\*").unwrap());

/// `_emphasis_`. Intraword matches are filtered out by the caller.
pub(crate) static EM_UNDERSCORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_([^_]*)_").unwrap());

/// `](url)` target of a link or image.
pub(crate) static LINK_TARGET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\]\(([^)]*)\)").unwrap());

/// Placeholder left by `LINK_TARGET_RE` substitution.
pub(crate) static TARGET_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<([0-9]+)>").unwrap());

/// `![alt](url)`
pub(crate) static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]*)\)").unwrap());

/// `[text](url)`
pub(crate) static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]*)\]\(([^)]*)\)").unwrap());

/// Two or more trailing spaces.
pub(crate) static HARD_BREAK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" {2,}$").unwrap());

/// Bare URL with an allowed scheme. Stops before `<` and `"` so it never runs
/// into a tag or attribute written by an earlier step.
pub(crate) static AUTOLINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\b(?:https?|ftp|mailto|file):[^\s<"]+"#).unwrap());
