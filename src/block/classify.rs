// Line classification.
//
// Each rule looks at one tab-expanded, non-blank line and either claims it
// with a typed LineKind or passes. Rules are tried in priority order and the
// first claim wins; a line no rule claims is generic text.

use std::sync::LazyLock;

use regex::Regex;

use super::context::ListKind;

/// Placeholder lines such as `{{toc}}` or `{{> toc}}`, dropped from output.
static FILTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\{\{\s*>?\s*toc\s*\}\}\s*$").unwrap());

static DOUBLE_UNDERLINE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^==+\s*$").unwrap());

static SINGLE_UNDERLINE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^--+\s*$").unwrap());

static ATX_HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#+)\s*(.*)$").unwrap());

static BULLET_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(( *)[-+*] +)(.*)$").unwrap());

static NUMBERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(( *)[0-9]+\. +)(.*)$").unwrap());

/// Setext underline flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Underline {
    /// `===`: level 1 heading.
    Double,
    /// `---`: level 2 heading or horizontal rule.
    Single,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LineKind<'a> {
    Filtered,
    Underline(Underline),
    /// `#` run of any length; the driver decides whether `level` is usable.
    Heading { level: usize, text: &'a str },
    ListItem {
        /// Column of the bullet.
        bullet_indent: usize,
        /// Column where the item text starts.
        content_indent: usize,
        kind: ListKind,
        content: &'a str,
    },
    Text { indent: usize, content: &'a str },
}

type Rule = for<'a> fn(&'a str) -> Option<LineKind<'a>>;

const RULES: &[Rule] = &[
    filtered,
    double_underline,
    single_underline,
    atx_heading,
    bullet_item,
    numbered_item,
];

/// Classify a non-blank line.
pub(crate) fn classify(line: &str) -> LineKind<'_> {
    RULES
        .iter()
        .find_map(|rule| rule(line))
        .unwrap_or_else(|| text(line))
}

/// Generic text: leading spaces and what follows them.
pub(crate) fn text(line: &str) -> LineKind<'_> {
    let content = line.trim_start_matches(' ');
    LineKind::Text {
        indent: line.len() - content.len(),
        content,
    }
}

fn filtered(line: &str) -> Option<LineKind<'_>> {
    FILTER_RE.is_match(line).then_some(LineKind::Filtered)
}

fn double_underline(line: &str) -> Option<LineKind<'_>> {
    DOUBLE_UNDERLINE_RE
        .is_match(line)
        .then_some(LineKind::Underline(Underline::Double))
}

fn single_underline(line: &str) -> Option<LineKind<'_>> {
    SINGLE_UNDERLINE_RE
        .is_match(line)
        .then_some(LineKind::Underline(Underline::Single))
}

fn atx_heading(line: &str) -> Option<LineKind<'_>> {
    let caps = ATX_HEADING_RE.captures(line)?;
    Some(LineKind::Heading {
        level: caps.get(1).map_or(0, |m| m.len()),
        text: caps.get(2).map_or("", |m| m.as_str().trim_end()),
    })
}

fn bullet_item(line: &str) -> Option<LineKind<'_>> {
    list_item(&BULLET_ITEM_RE, ListKind::Unordered, line)
}

fn numbered_item(line: &str) -> Option<LineKind<'_>> {
    list_item(&NUMBERED_ITEM_RE, ListKind::Ordered, line)
}

fn list_item<'a>(re: &Regex, kind: ListKind, line: &'a str) -> Option<LineKind<'a>> {
    let caps = re.captures(line)?;
    Some(LineKind::ListItem {
        bullet_indent: caps.get(2).map_or(0, |m| m.len()),
        content_indent: caps.get(1).map_or(0, |m| m.len()),
        kind,
        content: caps.get(3).map_or("", |m| m.as_str()),
    })
}
