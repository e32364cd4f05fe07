use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A single configuration option extracted from a `<var>` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigOption {
    /// Dotted path built from the enclosing containers and the element's own name.
    pub name: String,
    /// Trimmed text content of the element. May be empty.
    pub value: String,
    /// Trimmed inline comment, or empty when the line has none.
    pub comment: String,
}

impl ConfigOption {
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            comment: comment.into(),
        }
    }
}

/// Result of parsing a var block, including nesting diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Options in source order.
    pub options: Vec<ConfigOption>,
    /// Container names still open when the input ended, outermost first.
    pub unclosed: Vec<String>,
    /// Close lines encountered while no container was open.
    pub unmatched_closes: usize,
}

impl ParseReport {
    /// True when every container that was opened was also closed.
    pub fn is_balanced(&self) -> bool {
        self.unclosed.is_empty() && self.unmatched_closes == 0
    }
}

/// Output format for rendered options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Fixed-width text table (default)
    #[default]
    Table,
    /// Markdown table
    Markdown,
    /// Pretty-printed JSON array
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("Unknown output format '{0}'. Valid formats: table, md, markdown, json")]
    Unknown(String),
}

impl FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "table" => Ok(OutputFormat::Table),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            other => Err(FormatError::Unknown(other.to_string())),
        }
    }
}

impl OutputFormat {
    /// Resolve a format flag, falling back to [`OutputFormat::Table`] for unknown values.
    pub fn from_flag(flag: &str) -> Self {
        flag.parse().unwrap_or_default()
    }
}
