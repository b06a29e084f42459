// Inline span conversion.
//
// Turns the text of one input line into escaped XHTML phrasing content. The
// rewriting steps run in a fixed order, each on the output of the previous
// one: escape, code, strong, emphasis, image, link, hard break, bare URL.
// Escaping runs first so entities it introduces are never reinterpreted as
// markup.

mod escape;
mod patterns;

use regex::{Captures, Regex};

pub use escape::escape_html;
use patterns::*;

/// Stand-in for `:` inside link and image markup built by this module, so the
/// bare-URL step does not link a URL twice. Input is escaped before any
/// rewriting, so `<>` cannot occur in it and no tag we write contains it.
const COLON_SENTINEL: &str = "<>";

/// Convert the inline markup of one line of block text.
///
/// `suffixes` maps source extensions to target extensions for link URLs,
/// e.g. `(".md", ".xhtml")`.
pub(crate) fn convert_inline(text: &str, suffixes: &[(String, String)]) -> String {
    let text = escape_html(text);
    let text = CODE_RE.replace_all(&text, "<code>${1}</code>");

    // Link and image targets sit out the emphasis steps.
    let mut targets = Vec::new();
    let text = LINK_TARGET_RE.replace_all(&text, |caps: &Captures| {
        targets.push(caps[1].to_string());
        format!("](<{}>)", targets.len() - 1)
    });

    let text = STRONG_STAR_RE.replace_all(&text, "<strong>${1}</strong>");
    let text = replace_delimited(&STRONG_UNDERSCORE_RE, &text, "strong");
    let text = EM_STAR_RE.replace_all(&text, "<em>${1}</em>");
    let text = replace_delimited(&EM_UNDERSCORE_RE, &text, "em");
    let text = IMAGE_RE.replace_all(&text, |caps: &Captures| {
        let src = target(&caps[2], &targets);
        format!(r#"<img src="{}" alt="{}" />"#, hide_colons(src), hide_colons(&caps[1]))
    });
    let text = LINK_RE.replace_all(&text, |caps: &Captures| {
        let url = rewrite_suffix(target(&caps[2], &targets), suffixes);
        format!(r#"<a href="{}">{}</a>"#, hide_colons(&url), hide_colons(&caps[1]))
    });
    // `](url)` without an opening bracket is plain text again.
    let text = TARGET_TOKEN_RE.replace_all(&text, |caps: &Captures| {
        target(&caps[0], &targets).to_string()
    });
    let text = HARD_BREAK_RE.replace(&text, "<br/>");
    let text = AUTOLINK_RE.replace_all(&text, r#"<a href="${0}">${0}</a>"#);
    text.replace(COLON_SENTINEL, ":")
}

/// Resolve a `<n>` placeholder back to the target it replaced.
fn target<'t>(token: &'t str, targets: &'t [String]) -> &'t str {
    token
        .strip_prefix('<')
        .and_then(|t| t.strip_suffix('>'))
        .and_then(|n| n.parse::<usize>().ok())
        .and_then(|n| targets.get(n))
        .map_or(token, String::as_str)
}

/// Wrap `_`-delimited spans in `tag`, skipping matches with a word character
/// right outside a delimiter (`snake_case_name`, `a_b_c` in URLs).
fn replace_delimited(re: &Regex, text: &str, tag: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut at = 0;
    while let Some(caps) = re.captures_at(text, at) {
        let Some(whole) = caps.get(0) else { break };
        let before = text[..whole.start()].chars().next_back();
        let after = text[whole.end()..].chars().next();
        let intraword = before.is_some_and(is_word) || after.is_some_and(is_word);
        if intraword {
            // Delimiters are ASCII `_`, so one byte on is a char boundary.
            at = whole.start() + 1;
            continue;
        }
        out.push_str(&text[copied..whole.start()]);
        out.push_str(&format!("<{tag}>{}</{tag}>", &caps[1]));
        copied = whole.end();
        at = whole.end();
    }
    out.push_str(&text[copied..]);
    out
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn hide_colons(s: &str) -> String {
    s.replace(':', COLON_SENTINEL)
}

/// Replace a known source extension at the end of the URL's path with its
/// target extension. A `#fragment` or `?query` tail is kept as is.
pub(crate) fn rewrite_suffix(url: &str, suffixes: &[(String, String)]) -> String {
    let split = url.find(['#', '?']).unwrap_or(url.len());
    let (path, tail) = url.split_at(split);
    for (from, to) in suffixes {
        if from.is_empty() {
            continue;
        }
        if let Some(stem) = path.strip_suffix(from.as_str()) {
            return format!("{stem}{to}{tail}");
        }
    }
    url.to_string()
}
