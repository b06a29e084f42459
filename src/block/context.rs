// Nesting contexts.
//
// The document body is the bottom of the stack and cannot be popped: it is
// stored apart from the list levels above it, so the stack is never empty.

use std::fmt;

/// Ordered or unordered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `-`, `+` or `*` bullets, emitted as `<ul>`.
    Unordered,
    /// `1.` style bullets, emitted as `<ol>`.
    Ordered,
}

impl ListKind {
    pub(crate) fn open_tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "<ul>",
            ListKind::Ordered => "<ol>",
        }
    }

    pub(crate) fn close_tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "</ul>",
            ListKind::Ordered => "</ol>",
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ListKind::Unordered => "unordered",
            ListKind::Ordered => "ordered",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ContextKind {
    Body,
    List(ListKind),
}

/// How far the markup of a list level has been written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ItemStatus {
    /// Neither `<ul>`/`<ol>` nor `<li>` written yet.
    Outside,
    /// List tag written, no item open.
    InList,
    /// An `<li>` is open.
    InItem,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Context {
    pub kind: ContextKind,
    /// Column where content at this level starts.
    pub content_indent: usize,
    pub status: ItemStatus,
    /// Whether block text here is wrapped in `<p>`. Always true for the body;
    /// a list level switches to it once a blank line separates paragraphs
    /// inside one of its items.
    pub paragraph_wrapped: bool,
}

impl Context {
    fn body() -> Self {
        Self {
            kind: ContextKind::Body,
            content_indent: 0,
            status: ItemStatus::Outside,
            paragraph_wrapped: true,
        }
    }

    fn list(kind: ListKind, content_indent: usize) -> Self {
        Self {
            kind: ContextKind::List(kind),
            content_indent,
            status: ItemStatus::Outside,
            paragraph_wrapped: false,
        }
    }

    pub fn list_kind(&self) -> Option<ListKind> {
        match self.kind {
            ContextKind::Body => None,
            ContextKind::List(kind) => Some(kind),
        }
    }
}

/// Body plus one context per open list level.
#[derive(Debug, Clone)]
pub(crate) struct ContextStack {
    body: Context,
    lists: Vec<Context>,
}

impl ContextStack {
    pub fn new() -> Self {
        Self {
            body: Context::body(),
            lists: Vec::new(),
        }
    }

    pub fn current(&self) -> &Context {
        self.lists.last().unwrap_or(&self.body)
    }

    pub fn current_mut(&mut self) -> &mut Context {
        self.lists.last_mut().unwrap_or(&mut self.body)
    }

    /// Number of open list levels.
    pub fn depth(&self) -> usize {
        self.lists.len()
    }

    pub fn is_body(&self) -> bool {
        self.lists.is_empty()
    }

    /// The deepest level whose content column `indent` reaches.
    ///
    /// Walks bottom-up and stops at the first level whose content starts to
    /// the right of `indent`. The body starts at column 0, so every indent is
    /// at least at level 0.
    pub fn level_of(&self, indent: usize) -> usize {
        std::iter::once(&self.body)
            .chain(&self.lists)
            .take_while(|ctx| indent >= ctx.content_indent)
            .count()
            - 1
    }

    /// Level a bullet at column `bullet_indent` continues.
    ///
    /// `None` means the bullet reaches the content of the current level and
    /// so starts a new, deeper list. `Some(depth())` continues the current
    /// list; anything smaller returns to an ancestor.
    pub fn bullet_level(&self, bullet_indent: usize) -> Option<usize> {
        let level = self.level_of(bullet_indent);
        if level == self.depth() {
            None
        } else {
            Some(level + 1)
        }
    }

    pub fn push(&mut self, kind: ListKind, content_indent: usize) {
        self.lists.push(Context::list(kind, content_indent));
    }

    /// Remove the innermost list level. Returns `None`, leaving the stack
    /// untouched, when only the body is left.
    pub fn pop(&mut self) -> Option<Context> {
        self.lists.pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack(levels: &[usize]) -> ContextStack {
        let mut s = ContextStack::new();
        for &indent in levels {
            s.push(ListKind::Unordered, indent);
        }
        s
    }

    #[test]
    fn test_new_stack_is_body() {
        let s = ContextStack::new();
        assert!(s.is_body());
        assert_eq!(s.depth(), 0);
        assert_eq!(s.current().kind, ContextKind::Body);
        assert!(s.current().paragraph_wrapped);
    }

    #[test]
    fn test_level_of() {
        let s = stack(&[2, 4]);
        assert_eq!(s.level_of(0), 0);
        assert_eq!(s.level_of(1), 0);
        assert_eq!(s.level_of(2), 1);
        assert_eq!(s.level_of(3), 1);
        assert_eq!(s.level_of(4), 2);
        assert_eq!(s.level_of(10), 2);
    }

    #[test]
    fn test_bullet_level() {
        let s = stack(&[2, 4]);
        // Reaches the innermost content column: new level.
        assert_eq!(s.bullet_level(4), None);
        // Between the two content columns: continues the innermost list.
        assert_eq!(s.bullet_level(2), Some(2));
        assert_eq!(s.bullet_level(3), Some(2));
        // Back at the margin: the outer list.
        assert_eq!(s.bullet_level(0), Some(1));
    }

    #[test]
    fn test_bullet_level_at_body_always_opens() {
        let s = ContextStack::new();
        assert_eq!(s.bullet_level(0), None);
        assert_eq!(s.bullet_level(8), None);
    }

    #[test]
    fn test_push_pop() {
        let mut s = ContextStack::new();
        s.push(ListKind::Ordered, 3);
        assert_eq!(s.current().list_kind(), Some(ListKind::Ordered));
        assert_eq!(s.current().status, ItemStatus::Outside);
        assert!(!s.current().paragraph_wrapped);
        let popped = s.pop().unwrap();
        assert_eq!(popped.content_indent, 3);
        assert!(s.is_body());
    }

    #[test]
    fn test_pop_never_removes_body() {
        let mut s = ContextStack::new();
        assert!(s.pop().is_none());
        assert!(s.is_body());
        assert_eq!(s.current().kind, ContextKind::Body);
    }

    #[test]
    fn test_list_tags() {
        assert_eq!(ListKind::Unordered.open_tag(), "<ul>");
        assert_eq!(ListKind::Ordered.close_tag(), "</ol>");
    }
}
