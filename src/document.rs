// Document envelope.
//
// The converter only produces body content. A standalone XHTML file also needs
// the XML declaration, doctype, `<head>` with an embedded stylesheet and the
// `<body>` wrapper; this module writes those around the converted body.

use crate::emit::Sink;
use crate::inline::escape_html;

/// Stylesheet embedded by default.
pub const DEFAULT_STYLESHEET: &str = "\
body { padding: 1em; }
h1, h2, h3, h4, h5, h6 { font-weight: normal; }
h1 { font-size: 250%; margin: 1.5em 30px; }
h2 { font-size: 200%; margin: 1.5em 30px 0; border-bottom: 1px solid gray; }
h3, h4, h5, h6 { margin-left: 30px; }
h3 { font-size: 160%; border-left: 10px solid gray; padding-left: 5px; }
h4 { font-size: 140%; font-weight: bold; }
h5 { font-size: 120%; font-weight: bold; }
h6 { font-size: 100%; font-style: italic; }
pre, code {
  font-family: \"Consolas\", \"Lucida Console\", monospace;
  font-size: 0.9em;
  background-color: #F0F0F0;
}
pre {
  padding: 0.5em;
  overflow: auto;
  margin-left: 10px;
  border: 1px solid darkgray;
  border-radius: 6px;
}
body > p { margin-left: 30px; }
body > pre { margin-left: 40px; }
p { margin-left: 10px; }
ul, ol { margin-left: 15px; margin-bottom: 0.6em; }
a { text-decoration: none; }
a:hover { text-decoration: underline; }
";

/// Envelope settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOptions {
    /// Value of the `lang` and `xml:lang` attributes. Default: `"en"`.
    pub lang: String,
    /// Contents of `<title>`, omitted when `None`.
    pub title: Option<String>,
    /// Name of the input, recorded in a generator comment when set.
    pub source: Option<String>,
    /// CSS embedded in a `<style>` element, omitted when `None`.
    pub stylesheet: Option<String>,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            lang: "en".to_string(),
            title: None,
            source: None,
            stylesheet: Some(DEFAULT_STYLESHEET.to_string()),
        }
    }
}

/// Write everything up to and including `<body>`.
pub fn write_header<S: Sink + ?Sized>(sink: &mut S, options: &DocumentOptions) -> Result<(), S::Error> {
    sink.emit("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n")?;
    sink.emit("<!DOCTYPE html>\n")?;
    if let Some(source) = &options.source {
        sink.emit(&format!(
            "<!--\n  Generated from '{}' by {} {}\n-->\n",
            comment_safe(source),
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
        ))?;
    }
    let lang = escape_attribute(&options.lang);
    sink.emit(&format!(
        "<html xmlns=\"http://www.w3.org/1999/xhtml\" lang=\"{lang}\" xml:lang=\"{lang}\">\n"
    ))?;
    sink.emit("<head>\n")?;
    if let Some(title) = &options.title {
        sink.emit(&format!("  <title>{}</title>\n", escape_html(title)))?;
    }
    if let Some(css) = &options.stylesheet {
        sink.emit("  <style type=\"text/css\">\n")?;
        for line in css.lines() {
            if line.is_empty() {
                sink.emit("\n")?;
            } else {
                sink.emit(&format!("    {line}\n"))?;
            }
        }
        sink.emit("  </style>\n")?;
    }
    sink.emit("</head>\n")?;
    sink.emit("<body>\n")
}

/// Close `<body>` and `<html>`.
pub fn write_footer<S: Sink + ?Sized>(sink: &mut S) -> Result<(), S::Error> {
    sink.emit("</body>\n</html>\n")
}

fn escape_attribute(value: &str) -> String {
    escape_html(value).replace('"', "&quot;")
}

/// `--` may not appear inside an XML comment.
fn comment_safe(text: &str) -> String {
    let mut safe = text.to_string();
    while safe.contains("--") {
        safe = safe.replace("--", "- -");
    }
    safe
}
