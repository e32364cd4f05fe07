//! Line-oriented extraction of `<var>` elements.
//!
//! README configuration blocks are hand-written and often not well-formed XML,
//! so no tree is built. Each line is matched against three patterns and a path
//! stack tracks which container elements are currently open.

use regex::Regex;
use std::sync::LazyLock;

use super::types::{ConfigOption, ParseReport};

/// `<var name="...">` with nothing but whitespace after the tag.
static CONTAINER_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<var\s+name="([^"]+)"[^>]*>\s*$"#).unwrap());

/// `</var>` at the start of a line, optionally indented.
static CONTAINER_CLOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*</var>").unwrap());

static NAMED_OPEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<var\s+name=").unwrap());

/// `<var name="...">value</var>` with an optional trailing `<!-- comment -->`.
static ELEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<var\s+name="([^"]+)"[^>]*>([^<]*)</var>\s*(?:<!--\s*(.*?)\s*-->)?"#).unwrap()
});

/// What a single input line contributes to the parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Opens a container; the name becomes a path segment.
    Open(&'a str),
    /// Closes the innermost container.
    Close,
    /// A complete single-line element. Value and comment are already trimmed.
    Element {
        name: &'a str,
        value: &'a str,
        comment: &'a str,
    },
    /// Blank lines, comment-only lines and anything else.
    Other,
}

/// Classify a line. Patterns are tried in order: open, close, element.
pub fn classify_line(line: &str) -> Line<'_> {
    if let Some(name) = CONTAINER_OPEN.captures(line).and_then(|caps| caps.get(1)) {
        return Line::Open(name.as_str());
    }

    // A line like `</var><var name="x">1</var>` is an element, not a close.
    if CONTAINER_CLOSE.is_match(line) && !NAMED_OPEN.is_match(line) {
        return Line::Close;
    }

    if let Some(caps) = ELEMENT.captures(line) {
        let name = caps.get(1).map_or("", |m| m.as_str());
        let value = caps.get(2).map_or("", |m| m.as_str().trim());
        let comment = caps.get(3).map_or("", |m| m.as_str().trim());
        return Line::Element {
            name,
            value,
            comment,
        };
    }

    Line::Other
}

/// Incremental parser over the lines of a var block.
///
/// Nesting is never validated: a close with nothing open is counted and
/// ignored, and containers left open at the end are reported by [`finish`].
///
/// [`finish`]: VarBlockParser::finish
#[derive(Debug, Default)]
pub struct VarBlockParser {
    stack: Vec<String>,
    options: Vec<ConfigOption>,
    unmatched_closes: usize,
}

impl VarBlockParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of containers currently open.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn feed_line(&mut self, line: &str) {
        match classify_line(line) {
            Line::Open(name) => self.stack.push(name.to_string()),
            Line::Close => {
                if self.stack.pop().is_none() {
                    self.unmatched_closes += 1;
                }
            }
            Line::Element {
                name,
                value,
                comment,
            } => {
                let full_name = self.qualify(name);
                self.options.push(ConfigOption::new(full_name, value, comment));
            }
            Line::Other => {}
        }
    }

    pub fn finish(self) -> ParseReport {
        ParseReport {
            options: self.options,
            unclosed: self.stack,
            unmatched_closes: self.unmatched_closes,
        }
    }

    fn qualify(&self, name: &str) -> String {
        let mut full_name = self.stack.join(".");
        if !full_name.is_empty() {
            full_name.push('.');
        }
        full_name.push_str(name);
        full_name
    }
}

/// Parse a whole var block, keeping nesting diagnostics.
pub fn parse_report(input: &str) -> ParseReport {
    let mut parser = VarBlockParser::new();
    for line in input.split('\n') {
        parser.feed_line(line);
    }
    parser.finish()
}

/// Parse a whole var block into options in source order.
pub fn parse_var_block(input: &str) -> Vec<ConfigOption> {
    parse_report(input).options
}
