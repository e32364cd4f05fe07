//! Extraction of `<var>` configuration blocks from Hyvä UI component READMEs.
//!
//! The pipeline is parse → strip common prefix → render:
//!
//! - [`parse`]: line-oriented matcher with a nesting stack
//! - [`prefix`]: removal of a first path segment shared by every option
//! - [`render`]: fixed-width table, Markdown table or JSON output

pub mod parse;
pub mod prefix;
pub mod render;
pub mod types;

pub use parse::{classify_line, parse_report, parse_var_block, Line, VarBlockParser};
pub use prefix::{common_prefix, strip_common_prefix};
pub use render::{format_json, format_markdown, format_table, render, EMPTY_MESSAGE};
pub use types::{ConfigOption, FormatError, OutputFormat, ParseReport};

/// Run the full pipeline on `input` with prefix stripping enabled.
pub fn extract(input: &str, format: OutputFormat) -> String {
    let options = strip_common_prefix(parse_var_block(input));
    render(&options, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    const README_BLOCK: &str = r#"<!-- Configuration -->
<var name="review_carousel">
    <var name="speed">300</var> <!-- transition time in ms -->
    <var name="loop">true</var>
    <var name="breakpoints">
        <var name="mobile">1</var> <!-- slides | mobile -->
        <var name="desktop">3</var>
    </var>
</var>
"#;

    #[test]
    fn test_extract_table() {
        let expected = "\
Option              | Value | Description\n\
--------------------+-------+---------------------------------------------------\n\
speed               | 300   | transition time in ms\n\
loop                | true  | \n\
breakpoints.mobile  | 1     | slides | mobile\n\
breakpoints.desktop | 3     | \n";
        assert_eq!(extract(README_BLOCK, OutputFormat::Table), expected);
    }

    #[test]
    fn test_extract_markdown() {
        let markdown = extract(README_BLOCK, OutputFormat::Markdown);
        assert!(markdown.starts_with("| Option | Value | Description |\n"));
        assert!(markdown.contains("| `breakpoints.mobile` | `1` | slides \\| mobile |\n"));
        assert_eq!(markdown.lines().count(), 6);
    }

    #[test]
    fn test_extract_json_round_trip() {
        let json = extract(README_BLOCK, OutputFormat::Json);
        let parsed: Vec<ConfigOption> = serde_json::from_str(&json).unwrap();
        assert_eq!(
            parsed,
            strip_common_prefix(parse_var_block(README_BLOCK))
        );
        assert_eq!(parsed[0], ConfigOption::new("speed", "300", "transition time in ms"));
    }

    #[test]
    fn test_extract_without_options() {
        let input = "<!-- nothing here -->\n<var name=\"empty\">\n</var>\n";
        assert_eq!(extract(input, OutputFormat::Table), EMPTY_MESSAGE);
        assert_eq!(extract(input, OutputFormat::Markdown), EMPTY_MESSAGE);
        assert_eq!(extract(input, OutputFormat::Json), "[]\n");
    }

    #[test]
    fn test_extract_single_option_keeps_prefix() {
        let input = "<var name=\"wrapper\">\n  <var name=\"slides\">3</var> <!-- number of slides -->\n</var>\n";
        let json = extract(input, OutputFormat::Json);
        let parsed: Vec<ConfigOption> = serde_json::from_str(&json).unwrap();
        assert_eq!(
            parsed,
            vec![ConfigOption::new("wrapper.slides", "3", "number of slides")]
        );
    }
}
