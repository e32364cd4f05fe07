use super::types::{ConfigOption, OutputFormat};

/// Message printed by the table and Markdown renderers when nothing was found.
pub const EMPTY_MESSAGE: &str = "No configuration options found.\n";

const MIN_NAME_WIDTH: usize = 6;
const MIN_VALUE_WIDTH: usize = 5;
const MAX_VALUE_WIDTH: usize = 15;
const DESCRIPTION_RULE_WIDTH: usize = 50;
const ELLIPSIS: &str = "...";

/// Render options in the requested format.
pub fn render(options: &[ConfigOption], format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => format_table(options),
        OutputFormat::Markdown => format_markdown(options),
        OutputFormat::Json => format_json(options),
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Cut `value` to `width` characters, ending in `...` when shortened.
fn truncate_value(value: &str, width: usize) -> String {
    if char_len(value) <= width {
        return value.to_string();
    }

    let keep = width.saturating_sub(ELLIPSIS.len());
    let mut truncated: String = value.chars().take(keep).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

/// Fixed-width `Option | Value | Description` table.
pub fn format_table(options: &[ConfigOption]) -> String {
    if options.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }

    let name_width = options
        .iter()
        .map(|o| char_len(&o.name))
        .max()
        .unwrap_or(0)
        .max(MIN_NAME_WIDTH);
    let value_width = options
        .iter()
        .map(|o| char_len(&o.value))
        .max()
        .unwrap_or(0)
        .clamp(MIN_VALUE_WIDTH, MAX_VALUE_WIDTH);

    let mut output = String::new();

    output.push_str(&format!(
        "{:<name_width$} | {:<value_width$} | {}\n",
        "Option", "Value", "Description"
    ));
    output.push_str(&format!(
        "{}-+-{}-+-{}\n",
        "-".repeat(name_width),
        "-".repeat(value_width),
        "-".repeat(DESCRIPTION_RULE_WIDTH)
    ));

    for option in options {
        output.push_str(&format!(
            "{:<name_width$} | {:<value_width$} | {}\n",
            option.name,
            truncate_value(&option.value, value_width),
            option.comment
        ));
    }

    output
}

fn escape_pipes(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Markdown table with code-formatted option names and values.
pub fn format_markdown(options: &[ConfigOption]) -> String {
    if options.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }

    let mut output = String::from("| Option | Value | Description |\n");
    output.push_str("|--------|-------|-------------|\n");

    for option in options {
        output.push_str(&format!(
            "| `{}` | `{}` | {} |\n",
            option.name,
            escape_pipes(&option.value),
            escape_pipes(&option.comment)
        ));
    }

    output
}

/// Pretty-printed JSON array of `{name, value, comment}` objects.
pub fn format_json(options: &[ConfigOption]) -> String {
    // Only string fields, so serialization cannot fail.
    let mut output = serde_json::to_string_pretty(options).unwrap_or_else(|_| "[]".to_string());
    output.push('\n');
    output
}
