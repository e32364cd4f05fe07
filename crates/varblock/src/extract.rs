use crate::prelude::{eprintln, print, *};
use std::fmt;
use std::io::Read;
use std::path::PathBuf;

use varblock_core::varblock::{
    parse_report, render, strip_common_prefix, FormatError, OutputFormat, ParseReport,
};

#[derive(Debug, clap::Args, Clone)]
pub struct ExtractOptions {
    /// README XML block to read (reads stdin when omitted or "-")
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output format: table, md, markdown, or json (default: table)
    #[arg(short, long, env = "VARBLOCK_FORMAT", default_value = "table")]
    pub format: String,

    /// Keep the first path segment even when every option shares it
    #[arg(long, env = "VARBLOCK_KEEP_PREFIX")]
    pub keep_prefix: bool,
}

/// Where the XML block is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    fn location(&self) -> String {
        match self {
            InputSource::Stdin => "on stdin".to_string(),
            InputSource::File(path) => format!("in {}", path.display()),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "stdin"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl ExtractOptions {
    pub fn source(&self) -> InputSource {
        match &self.input {
            Some(path) if path.as_os_str() != "-" => InputSource::File(path.clone()),
            _ => InputSource::Stdin,
        }
    }
}

pub fn run(options: ExtractOptions, global: crate::Global) -> Result<()> {
    let source = options.source();
    let content = read_input(&source)?;
    let format = resolve_format(&options.format);

    log::debug!("Rendering {source} as {format:?}");

    let report = parse_report(&content);
    log_diagnostics(&report);

    if global.verbose {
        eprintln!("{}", summarize(&report, &source));
    }

    print!("{}", extract_data(report, format, options.keep_prefix));

    Ok(())
}

/// Public function for reuse - strip prefixes unless asked not to and render
pub fn extract_data(report: ParseReport, format: OutputFormat, keep_prefix: bool) -> String {
    let options = if keep_prefix {
        report.options
    } else {
        strip_common_prefix(report.options)
    };

    render(&options, format)
}

fn read_input(source: &InputSource) -> Result<String, Error> {
    let read_error = |err| Error::ReadInput {
        location: source.location(),
        source: err,
    };

    let content = match source {
        InputSource::Stdin => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(read_error)?;
            buffer
        }
        InputSource::File(path) => std::fs::read_to_string(path).map_err(read_error)?,
    };

    ensure_content(content, source)
}

/// Reject input that is empty or whitespace only.
fn ensure_content(content: String, source: &InputSource) -> Result<String, Error> {
    if content.trim().is_empty() {
        return Err(Error::EmptyInput(source.location()));
    }
    Ok(content)
}

/// Unknown flags fall back to the table format.
fn resolve_format(flag: &str) -> OutputFormat {
    flag.parse().unwrap_or_else(|err: FormatError| {
        log::warn!("{err}. Falling back to table");
        OutputFormat::Table
    })
}

fn log_diagnostics(report: &ParseReport) {
    for name in &report.unclosed {
        log::warn!("Container '{name}' is never closed");
    }
    if report.unmatched_closes > 0 {
        log::warn!(
            "Ignored {} closing tag(s) with no open container",
            report.unmatched_closes
        );
    }
}

fn summarize(report: &ParseReport, source: &InputSource) -> String {
    let mut summary = format!(
        "Parsed {} option(s) from {source}",
        report.options.len()
    );
    if !report.unclosed.is_empty() {
        summary.push_str(&format!(
            "\nUnclosed containers: {}",
            report.unclosed.join(", ")
        ));
    }
    if report.unmatched_closes > 0 {
        summary.push_str(&format!(
            "\nUnmatched closing tags: {}",
            report.unmatched_closes
        ));
    }
    summary
}
