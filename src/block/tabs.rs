// Leading tab expansion.

use std::borrow::Cow;

pub(crate) const TAB_WIDTH: usize = 4;

/// Replace each tab of the line's leading run of tabs with four spaces.
/// Tabs anywhere else are left alone.
pub(crate) fn expand_leading_tabs(line: &str) -> Cow<'_, str> {
    let rest = line.trim_start_matches('\t');
    let tabs = line.len() - rest.len();
    if tabs == 0 {
        return Cow::Borrowed(line);
    }
    let mut expanded = " ".repeat(tabs * TAB_WIDTH);
    expanded.push_str(rest);
    Cow::Owned(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_tabs_borrows() {
        assert!(matches!(expand_leading_tabs("plain"), Cow::Borrowed("plain")));
    }

    #[test]
    fn test_leading_tabs_expand() {
        assert_eq!(expand_leading_tabs("\tcode"), "    code");
        assert_eq!(expand_leading_tabs("\t\tdeeper"), "        deeper");
    }

    #[test]
    fn test_inner_tabs_untouched() {
        assert_eq!(expand_leading_tabs("\ta\tb"), "    a\tb");
        assert_eq!(expand_leading_tabs("  \tx"), "  \tx");
    }
}
