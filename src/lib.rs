// md2xhtml: streaming Markdown-dialect to XHTML converter.
//
// Architecture:
//   lines → block::Parser (classify, context stack, spool, flush) → Emitter → Sink
//                 ↓
//           inline::convert_inline (escape, spans, links, autolinks)
//
// The core produces body content only; `document` wraps it in a complete
// XHTML file and `bin/md2xhtml` maps command-line flags onto Options.

macro_rules! log_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}

macro_rules! log_warn {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::warn!($($arg)*);
    };
}

mod block;
mod diagnostic;
pub mod document;
mod emit;
mod error;
mod inline;

use std::io::{BufRead, Write};

pub use block::{ListKind, Parser};
pub use diagnostic::{Diagnostic, DiagnosticSink};
pub use document::DocumentOptions;
pub use emit::{IoSink, Sink};
pub use error::Md2XhtmlError;
pub use inline::escape_html;

/// Conversion options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Link target suffix rewrites, applied to the first matching `from`.
    /// Default: `[(".md", ".xhtml")]`.
    pub suffix_map: Vec<(String, String)>,
    /// Envelope settings for [`convert_document`].
    pub document: DocumentOptions,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            suffix_map: vec![(".md".to_string(), ".xhtml".to_string())],
            document: DocumentOptions::default(),
        }
    }
}

impl Options {
    /// Create a new Options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rewrite link targets ending in `from` to end in `to` instead.
    /// Replaces an existing rule for the same `from`.
    pub fn with_suffix(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        let from = from.into();
        let to = to.into();
        match self.suffix_map.iter_mut().find(|(f, _)| *f == from) {
            Some(rule) => rule.1 = to,
            None => self.suffix_map.push((from, to)),
        }
        self
    }

    /// Leave every link target as written.
    pub fn without_suffixes(mut self) -> Self {
        self.suffix_map.clear();
        self
    }

    /// Set the document language.
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.document.lang = lang.into();
        self
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.document.title = Some(title.into());
        self
    }

    /// Record the input name in the generator comment.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.document.source = Some(source.into());
        self
    }

    /// Replace the embedded stylesheet.
    pub fn with_stylesheet(mut self, css: impl Into<String>) -> Self {
        self.document.stylesheet = Some(css.into());
        self
    }

    /// Omit the `<style>` element.
    pub fn without_stylesheet(mut self) -> Self {
        self.document.stylesheet = None;
        self
    }
}

/// Convert Markdown to an XHTML body fragment using default options.
///
/// # Examples
///
/// ```
/// let html = md2xhtml::convert("Hello *world*");
/// assert_eq!(html, "<p>Hello <em>world</em></p>\n");
/// ```
pub fn convert(markdown: &str) -> String {
    convert_with(markdown, &Options::default())
}

/// Convert Markdown to an XHTML body fragment with custom options.
///
/// # Examples
///
/// ```
/// use md2xhtml::{convert_with, Options};
///
/// let options = Options::new().with_suffix(".md", ".html");
/// let html = convert_with("[next](next.md)", &options);
/// assert_eq!(html, "<p><a href=\"next.html\">next</a></p>\n");
/// ```
pub fn convert_with(markdown: &str, options: &Options) -> String {
    convert_lines(markdown.lines(), options)
}

/// Convert already split lines. Lines must not carry their terminators.
pub fn convert_lines<'l>(lines: impl IntoIterator<Item = &'l str>, options: &Options) -> String {
    let mut out = String::new();
    let mut parser = Parser::new(options, &mut out);
    for line in lines {
        let Ok(()) = parser.feed(line);
    }
    let Ok(()) = parser.finish();
    out
}

/// Convert Markdown to a complete XHTML document.
pub fn convert_document(markdown: &str, options: &Options) -> String {
    let mut out = String::new();
    let Ok(()) = document::write_header(&mut out, &options.document);
    out.push_str(&convert_with(markdown, options));
    let Ok(()) = document::write_footer(&mut out);
    out
}

/// Stream `reader` line by line into `writer` as an XHTML body fragment.
///
/// Output is written as soon as each block is complete; the writer is
/// flushed before returning.
pub fn convert_reader<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    options: &Options,
    diagnostics: Option<&mut dyn DiagnosticSink>,
) -> Result<(), Md2XhtmlError> {
    let mut sink = IoSink::new(&mut writer);
    let mut parser = Parser::new(options, &mut sink);
    if let Some(diagnostics) = diagnostics {
        parser = parser.with_diagnostics(diagnostics);
    }
    for line in reader.lines() {
        parser.feed(&line?)?;
    }
    parser.finish()?;
    writer.flush()?;
    Ok(())
}
