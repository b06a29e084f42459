// Regression tests. Every bug found becomes a test case here.
// Never delete a test from this file.

use md2xhtml::{convert, Diagnostic, Options, Parser};
use pretty_assertions::assert_eq;

/// A sibling item after a nested list must start a new `<li>` at the outer
/// level, after the ancestor's item has been closed.
#[test]
fn sibling_after_nested_list_closes_ancestor_item() {
    assert_eq!(
        convert("- a\n  - b\n    - c\n- d\n"),
        concat!(
            "  <ul>\n",
            "   <li>a\n",
            "    <ul>\n",
            "     <li>b\n",
            "      <ul>\n",
            "       <li>c</li>\n",
            "      </ul>\n",
            "     </li>\n",
            "    </ul>\n",
            "   </li>\n",
            "   <li>d</li>\n",
            "  </ul>\n",
        )
    );
}

/// Bare URL detection must not run into the markup generated around it.
#[test]
fn autolink_stops_before_generated_tags() {
    assert_eq!(
        convert("`http://x.org`"),
        "<p><code><a href=\"http://x.org\">http://x.org</a></code></p>\n"
    );
}

/// A link whose URL carries a scheme must not be linked a second time.
#[test]
fn link_url_is_not_autolinked() {
    assert_eq!(
        convert("[home](https://example.com/)"),
        "<p><a href=\"https://example.com/\">home</a></p>\n"
    );
}

/// Entities already present in the input are kept, not double-escaped.
#[test]
fn existing_entities_are_not_double_escaped() {
    assert_eq!(convert("&copy; 2024 &amp; &#8212;"), "<p>&copy; 2024 &amp; &#8212;</p>\n");
    assert_eq!(convert("AT&T"), "<p>AT&amp;T</p>\n");
}

/// Blank lines inside a preformatted block are content, even two in a row.
#[test]
fn double_blank_inside_preformatted_keeps_block_open() {
    assert_eq!(convert("    a\n\n\n    b\n"), "<pre>a\n\n\nb</pre>\n");
}

/// `===` without a paragraph above it is text, not an empty heading.
#[test]
fn lone_double_underline_is_text() {
    assert_eq!(convert("==="), "<p>===</p>\n");
}

/// An item with nothing after the bullet still opens and closes an `<li>`.
#[test]
fn empty_item_is_balanced() {
    assert_eq!(convert("- \n- b\n"), "  <ul>\n   <li></li>\n   <li>b</li>\n  </ul>\n");
}

/// A well-formed document produces no diagnostics.
#[test]
fn well_formed_input_reports_nothing() {
    let options = Options::default();
    let mut out = String::new();
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    {
        let mut parser = Parser::new(&options, &mut out).with_diagnostics(&mut diagnostics);
        for line in ["- a", "  1. b", "", "", "text"] {
            let Ok(()) = parser.feed(line);
        }
        let Ok(()) = parser.finish();
    }
    assert!(diagnostics.is_empty(), "{diagnostics:?}");
}

/// Underscores inside a link target must not become emphasis markup inside
/// the `href` attribute.
#[test]
fn underscores_in_link_target_stay_literal() {
    let html = convert("[setup](install_guide_v2.md)");
    assert_eq!(html, "<p><a href=\"install_guide_v2.xhtml\">setup</a></p>\n");
    assert!(!html.contains("href=\"install<"));
}

/// Intraword underscores in text and bare URLs are not emphasis delimiters.
#[test]
fn snake_case_and_bare_url_underscores_stay_literal() {
    assert_eq!(
        convert("set max_line_width first"),
        "<p>set max_line_width first</p>\n"
    );
    assert_eq!(
        convert("see https://x.org/a_b_c"),
        "<p>see <a href=\"https://x.org/a_b_c\">https://x.org/a_b_c</a></p>\n"
    );
}

/// A hard break is followed by the spool's line separator inside a block and
/// directly by the closing tag on a block's last line.
#[test]
fn hard_break_newline_comes_from_the_block() {
    assert_eq!(convert("one  \ntwo"), "<p>one<br/>\ntwo</p>\n");
    assert_eq!(convert("- a  "), "  <ul>\n   <li>a<br/></li>\n  </ul>\n");
}
