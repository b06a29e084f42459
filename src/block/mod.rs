// Block structure.
//
// The Parser consumes one input line at a time. Each non-blank line is
// classified, then mutates the context stack and the spool; flushes turn the
// spooled text and open list levels into output tags.
//
//   line → expand tabs → classify → list / text / heading handlers
//                                        ↓
//                         flush(Block | Para | Item | List) → Emitter → Sink

mod classify;
mod context;
mod flush;
mod spool;
mod tabs;

use std::mem;

use crate::diagnostic::{Diagnostic, DiagnosticSink};
use crate::emit::{Emitter, Sink};
use crate::inline::{convert_inline, escape_html};
use crate::Options;

use classify::{LineKind, Underline};
use context::{ContextStack, ItemStatus};
use flush::FlushLevel;
use spool::Spool;

pub use context::ListKind;

/// Deepest `#` heading; longer runs of `#` are plain text.
pub(crate) const MAX_HEADING_LEVEL: usize = 6;

/// Columns beyond the current content column that make a line preformatted.
pub(crate) const PRE_INDENT: usize = 4;

/// How spooled text is written when flushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ParagraphMode {
    Plain,
    Preformatted,
}

/// Line-at-a-time converter state for one document.
///
/// Feed every input line (without its line terminator) in order, then call
/// [`finish`](Parser::finish) to close whatever is still open. Output goes to
/// the sink as soon as each block is complete.
///
/// # Examples
///
/// ```
/// use md2xhtml::{Options, Parser};
///
/// let options = Options::default();
/// let mut out = String::new();
/// let mut parser = Parser::new(&options, &mut out);
/// for line in ["# Notes", "", "Some *text*."] {
///     let Ok(()) = parser.feed(line);
/// }
/// let Ok(()) = parser.finish();
/// assert_eq!(out, "<h1>Notes</h1>\n<p>Some <em>text</em>.</p>\n");
/// ```
pub struct Parser<'a, S: Sink + ?Sized> {
    options: &'a Options,
    diagnostics: Option<&'a mut dyn DiagnosticSink>,
    out: Emitter<'a, S>,
    stack: ContextStack,
    spool: Spool,
    mode: ParagraphMode,
    /// Blank lines seen since the last non-blank line.
    blanks: usize,
    /// 1-based number of the last line fed.
    line: usize,
}

impl<'a, S: Sink + ?Sized> Parser<'a, S> {
    pub fn new(options: &'a Options, sink: &'a mut S) -> Self {
        Self {
            options,
            diagnostics: None,
            out: Emitter::new(sink),
            stack: ContextStack::new(),
            spool: Spool::default(),
            mode: ParagraphMode::Plain,
            blanks: 0,
            line: 0,
        }
    }

    /// Report structural inconsistencies to `diagnostics`.
    pub fn with_diagnostics(mut self, diagnostics: &'a mut dyn DiagnosticSink) -> Self {
        self.diagnostics = Some(diagnostics);
        self
    }

    /// Process one input line.
    pub fn feed(&mut self, raw: &str) -> Result<(), S::Error> {
        self.line += 1;
        let line = tabs::expand_leading_tabs(raw);
        if line.trim().is_empty() {
            self.blanks += 1;
            return Ok(());
        }

        let continues_pre = self.continues_preformatted(&line);
        let kind = if continues_pre {
            classify::text(&line)
        } else {
            classify::classify(&line)
        };
        log_debug!(line = self.line, ?kind, blanks = self.blanks, "classified");

        let blanks = match kind {
            LineKind::Filtered => return Ok(()),
            _ => mem::take(&mut self.blanks),
        };
        if blanks >= 2 && !continues_pre {
            self.flush(FlushLevel::Block)?;
        }

        match kind {
            LineKind::Filtered => Ok(()),
            LineKind::Underline(Underline::Double) => {
                if self.promotes_to_heading(blanks) {
                    self.heading(1)
                } else {
                    self.flush(FlushLevel::Block)?;
                    self.spool_text(line.trim_end());
                    Ok(())
                }
            }
            LineKind::Underline(Underline::Single) => {
                if self.promotes_to_heading(blanks) {
                    self.heading(2)
                } else {
                    self.flush(FlushLevel::Block)?;
                    self.out.line("", "<hr/>")
                }
            }
            LineKind::Heading { level, text } => {
                self.flush(FlushLevel::Block)?;
                if level <= MAX_HEADING_LEVEL {
                    self.spool_text(text);
                    self.heading(level)
                } else {
                    self.spool_text(line.trim_end());
                    Ok(())
                }
            }
            LineKind::ListItem {
                bullet_indent,
                content_indent,
                kind,
                content,
            } => self.list_item(bullet_indent, content_indent, kind, content),
            LineKind::Text { indent, content } => self.text_line(indent, content, blanks),
        }
    }

    /// Close the open paragraph, preformatted block and list levels.
    pub fn finish(mut self) -> Result<(), S::Error> {
        log_debug!(lines = self.line, "finishing");
        self.flush(FlushLevel::Block)
    }

    /// Inside a preformatted block, a line indented at least `PRE_INDENT`
    /// past the current content column belongs to the block whatever it
    /// looks like.
    fn continues_preformatted(&self, line: &str) -> bool {
        let indent = line.len() - line.trim_start_matches(' ').len();
        self.mode == ParagraphMode::Preformatted
            && indent >= self.stack.current().content_indent + PRE_INDENT
    }

    /// A setext underline turns the spooled paragraph into a heading only when
    /// it follows that paragraph directly.
    fn promotes_to_heading(&self, blanks: usize) -> bool {
        blanks == 0 && self.mode == ParagraphMode::Plain && self.spool.is_spooled()
    }

    fn heading(&mut self, level: usize) -> Result<(), S::Error> {
        let Some(content) = self.spool.take() else {
            return Ok(());
        };
        self.open_container()?;
        let indent = self.block_indent();
        self.out.line(&indent, &format!("<h{level}>{content}</h{level}>"))
    }

    fn list_item(
        &mut self,
        bullet_indent: usize,
        content_indent: usize,
        kind: ListKind,
        content: &str,
    ) -> Result<(), S::Error> {
        if self.stack.is_body() {
            self.flush(FlushLevel::Block)?;
        }

        let depth = self.stack.depth();
        match self.stack.bullet_level(bullet_indent) {
            None => {
                // Deeper list: it opens inside the current item, which
                // stays open until the nested list closes.
                if !self.stack.is_body() {
                    self.flush(FlushLevel::Para)?;
                    self.open_container()?;
                }
                self.push(kind, content_indent);
            }
            Some(level) if level == depth => self.flush(FlushLevel::Item)?,
            Some(level) => {
                for _ in level..depth {
                    self.flush(FlushLevel::List)?;
                }
                self.flush(FlushLevel::Item)?;
            }
        }

        if self.stack.current().list_kind() == Some(kind) {
            // Item text may start at a different column than its siblings'.
            self.stack.current_mut().content_indent = content_indent;
        } else {
            self.flush(FlushLevel::List)?;
            self.push(kind, content_indent);
        }

        self.spool_text(content);
        Ok(())
    }

    fn text_line(&mut self, indent: usize, content: &str, blanks: usize) -> Result<(), S::Error> {
        let closing = self.stack.depth() - self.stack.level_of(indent);
        for _ in 0..closing {
            self.flush(FlushLevel::List)?;
        }

        if closing == 0 && blanks == 1 && self.mode != ParagraphMode::Preformatted {
            self.stack.current_mut().paragraph_wrapped = true;
            self.flush(FlushLevel::Para)?;
        }

        let offset = indent.saturating_sub(self.stack.current().content_indent);
        if offset >= PRE_INDENT {
            if self.mode != ParagraphMode::Preformatted {
                self.flush(FlushLevel::Para)?;
            } else if blanks > 0 {
                self.spool.push(&"\n".repeat(blanks));
            }
            self.mode = ParagraphMode::Preformatted;
            let pad = " ".repeat(offset - PRE_INDENT);
            self.spool.push_line(&format!("{pad}{}", escape_html(content)));
        } else {
            if blanks > 0 || self.mode == ParagraphMode::Preformatted {
                self.flush(FlushLevel::Para)?;
            }
            self.spool_text(content);
        }
        Ok(())
    }

    fn push(&mut self, kind: ListKind, content_indent: usize) {
        log_debug!(%kind, content_indent, depth = self.stack.depth() + 1, "open list level");
        self.stack.push(kind, content_indent);
    }

    fn spool_text(&mut self, text: &str) {
        let converted = convert_inline(text, &self.options.suffix_map);
        self.spool.push_line(&converted);
    }

    fn warn(&mut self, diagnostic: Diagnostic) {
        log_warn!("{diagnostic}");
        if let Some(sink) = self.diagnostics.as_deref_mut() {
            sink.report(diagnostic);
        }
    }

    /// Indentation of `<ul>`/`<ol>` at the current depth.
    fn list_indent(&self) -> String {
        "  ".repeat(self.stack.depth())
    }

    fn item_indent(&self) -> String {
        let mut indent = self.list_indent();
        indent.push(' ');
        indent
    }

    /// Indentation of block tags (`<p>`, `<pre>`, headings) at the current
    /// depth: flush left in the body, one step inside `<li>` otherwise.
    fn block_indent(&self) -> String {
        match self.stack.depth() {
            0 => String::new(),
            depth => "  ".repeat(depth + 1),
        }
    }
}
