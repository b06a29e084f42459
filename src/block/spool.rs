// Text of the block under construction.

/// Accumulates converted lines until a flush emits them.
///
/// An empty item (`- ` with nothing after the bullet) still counts as
/// spooled, so spooling an empty string is distinct from spooling nothing.
#[derive(Debug, Default)]
pub(crate) struct Spool {
    buffer: Option<String>,
}

impl Spool {
    pub fn is_spooled(&self) -> bool {
        self.buffer.is_some()
    }

    /// Append `text` verbatim. Callers add their own line endings.
    pub fn push(&mut self, text: &str) {
        self.buffer.get_or_insert_with(String::new).push_str(text);
    }

    /// Append one line of block text followed by a newline.
    pub fn push_line(&mut self, line: &str) {
        let buffer = self.buffer.get_or_insert_with(String::new);
        buffer.push_str(line);
        buffer.push('\n');
    }

    /// Take the spooled text, without its final newline, and clear the spool.
    pub fn take(&mut self) -> Option<String> {
        let mut text = self.buffer.take()?;
        if text.ends_with('\n') {
            text.pop();
        }
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_spool() {
        let mut s = Spool::default();
        assert!(!s.is_spooled());
        assert_eq!(s.take(), None);
    }

    #[test]
    fn test_lines_join_and_final_newline_is_dropped() {
        let mut s = Spool::default();
        s.push_line("one");
        s.push_line("two");
        assert_eq!(s.take().as_deref(), Some("one\ntwo"));
        assert!(!s.is_spooled());
    }

    #[test]
    fn test_empty_string_counts_as_spooled() {
        let mut s = Spool::default();
        s.push("");
        assert!(s.is_spooled());
        assert_eq!(s.take().as_deref(), Some(""));
    }

    #[test]
    fn test_only_one_newline_dropped() {
        let mut s = Spool::default();
        s.push("a\n\n");
        assert_eq!(s.take().as_deref(), Some("a\n"));
    }
}
