//! Console output formatter for response envelopes

use analyst_domain::{OutputFormat, ResponseEnvelope};
use colored::Colorize;
use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// A numbered item at the start of a line ("1. ...")
static NUMBERED_LINE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\s*\d+\.\s").ok());

/// Whitespace before a further numbered item on the same line
static INLINE_NUMBERED: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\s+(\d+\.\s)").ok());

/// A markdown header line
static HEADER_LINE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(#+\s[^\n]+)\n").ok());

/// Whitespace before a further `* ` bullet on the same line
static INLINE_BULLET: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\s+(\*\s)").ok());

/// Formats response envelopes for console display
pub struct ConsoleFormatter {
    format: OutputFormat,
    color: bool,
}

impl ConsoleFormatter {
    pub fn new(format: OutputFormat, color: bool) -> Self {
        Self { format, color }
    }

    /// Render an envelope in the configured format
    pub fn render(&self, envelope: &ResponseEnvelope, highlights: &[String]) -> String {
        match self.format {
            OutputFormat::Json => Self::format_json(envelope),
            OutputFormat::Text => self.format_text(envelope, highlights),
        }
    }

    /// Format as JSON
    pub fn format_json(envelope: &ResponseEnvelope) -> String {
        serde_json::to_string_pretty(envelope).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_text(&self, envelope: &ResponseEnvelope, highlights: &[String]) -> String {
        if !envelope.success {
            return if self.color {
                envelope.response.red().to_string()
            } else {
                envelope.response.clone()
            };
        }

        let mut output = format_cli_response(&envelope.response);
        if self.color {
            output = highlight_terms(&output, highlights);
        }

        if !envelope.used_tools.is_empty() {
            let line = format!("Tools used: {}", envelope.used_tools.join(", "));
            output.push_str("\n\n");
            if self.color {
                output.push_str(&line.dimmed().to_string());
            } else {
                output.push_str(&line);
            }
        }

        output
    }
}

/// Add readable spacing to model output
///
/// - a blank line between numbered items that share a line
/// - a blank line after markdown headers
/// - a line break between `* ` bullets that share a line
pub fn format_cli_response(text: &str) -> String {
    let spaced: Vec<String> = text.split('\n').map(space_line).collect();
    let mut text = spaced.join("\n");

    if let Some(header) = HEADER_LINE.as_ref() {
        text = header.replace_all(&text, "$1\n\n").into_owned();
    }
    text
}

fn space_line(line: &str) -> String {
    if let (Some(numbered), Some(inline)) = (NUMBERED_LINE.as_ref(), INLINE_NUMBERED.as_ref())
        && let Some(item) = numbered.find(line)
    {
        let (head, rest) = line.split_at(item.end());
        return format!("{}{}", head, inline.replace_all(rest, "\n\n$1"));
    }

    if let Some(inline) = INLINE_BULLET.as_ref()
        && let Some(first) = line.find("* ")
    {
        let (head, rest) = line.split_at(first + 2);
        return format!("{}{}", head, inline.replace_all(rest, "\n$1"));
    }

    line.to_string()
}

/// Case-insensitively highlight every occurrence of each term in bold yellow
pub fn highlight_terms(text: &str, terms: &[String]) -> String {
    let mut result = text.to_string();
    for term in terms.iter().filter(|t| !t.is_empty()) {
        let Ok(pattern) = RegexBuilder::new(&regex::escape(term))
            .case_insensitive(true)
            .build()
        else {
            continue;
        };
        result = pattern
            .replace_all(&result, |caps: &regex::Captures| {
                caps[0].bold().yellow().to_string()
            })
            .into_owned();
    }
    result
}
