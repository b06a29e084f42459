// HTML metacharacter escaping.
//
// Only `&`, `<` and `>` are rewritten. An `&` that already starts a character
// reference (`&amp;`, `&#38;`, `&#x26;`) is left alone, which keeps escaping
// idempotent: escaping escaped text changes nothing.

/// Escape `&`, `<` and `>` for use in XHTML text and attribute values.
///
/// # Examples
///
/// ```
/// use md2xhtml::escape_html;
///
/// assert_eq!(escape_html("a < b && c"), "a &lt; b &amp;&amp; c");
/// assert_eq!(escape_html("&lt;kept&gt;"), "&lt;kept&gt;");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 8);
    for (i, c) in text.char_indices() {
        match c {
            '&' if starts_char_ref(&text[i + 1..]) => result.push('&'),
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            c => result.push(c),
        }
    }
    result
}

/// Longest reference name we look ahead for.
const MAX_REF_LEN: usize = 32;

/// Whether `rest` (the text right after an `&`) is the body of a named or
/// numeric character reference terminated by `;`.
fn starts_char_ref(rest: &str) -> bool {
    let Some(end) = rest.bytes().take(MAX_REF_LEN).position(|b| b == b';') else {
        return false;
    };
    let name = &rest[..end];
    if let Some(number) = name.strip_prefix('#') {
        match number.strip_prefix(['x', 'X']) {
            Some(hex) => !hex.is_empty() && hex.bytes().all(|b| b.is_ascii_hexdigit()),
            None => !number.is_empty() && number.bytes().all(|b| b.is_ascii_digit()),
        }
    } else {
        name.bytes().next().is_some_and(|b| b.is_ascii_alphabetic())
            && name.bytes().all(|b| b.is_ascii_alphanumeric())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_metacharacters() {
        assert_eq!(escape_html("<a href=\"x\">&</a>"), "&lt;a href=\"x\"&gt;&amp;&lt;/a&gt;");
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(escape_html("nothing to see"), "nothing to see");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_character_references_pass_through() {
        assert_eq!(escape_html("&amp; &copy; &#169; &#xA9;"), "&amp; &copy; &#169; &#xA9;");
    }

    #[test]
    fn test_ampersand_without_reference() {
        assert_eq!(escape_html("R&D; fish & chips"), "R&D; fish &amp; chips");
        assert_eq!(escape_html("&#;"), "&amp;#;");
        assert_eq!(escape_html("&#x;"), "&amp;#x;");
        assert_eq!(escape_html("&1abc;"), "&amp;1abc;");
        assert_eq!(escape_html("& ;"), "&amp; ;");
        assert_eq!(escape_html("trailing &"), "trailing &amp;");
    }

    #[test]
    fn test_idempotent() {
        let once = escape_html("if a < b && b > c { \"x\" }");
        assert_eq!(escape_html(&once), once);
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(escape_html("日本語 <b> & é"), "日本語 &lt;b&gt; &amp; é");
    }
}
