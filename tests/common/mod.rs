// Shared test helpers for md2xhtml.

use std::fs;
use std::path::Path;

use md2xhtml::Options;
use serde::Deserialize;

/// Settings read from a fixture's optional `index.json`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FixtureConfig {
    /// Replaces the default suffix map when present.
    suffixes: Option<Vec<(String, String)>>,
    /// Wrap the output in the document envelope.
    document: bool,
    lang: Option<String>,
    title: Option<String>,
    /// `false` drops the embedded stylesheet.
    stylesheet: Option<bool>,
}

#[allow(dead_code)]
pub struct Fixture {
    pub markdown: String,
    pub expected: String,
    pub options: Options,
    pub document: bool,
}

/// Load a test fixture's input Markdown, expected XHTML, and options.
///
/// Fixture directories contain `index.md`, `index.xhtml`, and optionally `index.json`.
#[allow(dead_code)]
pub fn load_fixture(name: &str) -> Fixture {
    let base = Path::new(env!("CARGO_MANIFEST_DIR")).join("test-fixtures").join(name);
    let markdown = fs::read_to_string(base.join("index.md"))
        .unwrap_or_else(|_| panic!("Missing fixture: {}/index.md", name));
    let expected = fs::read_to_string(base.join("index.xhtml"))
        .unwrap_or_else(|_| panic!("Missing fixture: {}/index.xhtml", name));

    let config: FixtureConfig = match fs::read_to_string(base.join("index.json")) {
        Ok(json) => serde_json::from_str(&json)
            .unwrap_or_else(|e| panic!("Bad fixture options {}/index.json: {e}", name)),
        Err(_) => FixtureConfig::default(),
    };

    let mut options = Options::default();
    if let Some(suffixes) = config.suffixes {
        options = options.without_suffixes();
        for (from, to) in suffixes {
            options = options.with_suffix(from, to);
        }
    }
    if let Some(lang) = config.lang {
        options = options.with_lang(lang);
    }
    if let Some(title) = config.title {
        options = options.with_title(title);
    }
    if config.stylesheet == Some(false) {
        options = options.without_stylesheet();
    }

    Fixture { markdown, expected, options, document: config.document }
}

/// Tag names in document order, closing tags prefixed with `/`.
#[allow(dead_code)]
pub fn tag_sequence(html: &str) -> Vec<String> {
    let mut tags = Vec::new();
    let mut rest = html;
    while let Some(start) = rest.find('<') {
        rest = &rest[start + 1..];
        let closing = rest.starts_with('/');
        let name: String = rest
            .trim_start_matches('/')
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .collect();
        if name.is_empty() || !name.starts_with(|c: char| c.is_ascii_alphabetic()) {
            continue;
        }
        tags.push(if closing { format!("/{name}") } else { name });
    }
    tags
}
