//! Query value object

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Characters of query text kept in log lines.
const LOG_PREVIEW_CHARS: usize = 100;

/// Shorten free text for a log or listing line.
///
/// Keeps at most `max_chars` characters and marks the cut with `...`; text
/// that already fits is borrowed unchanged.
pub fn preview(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        None => Cow::Borrowed(text),
        Some((cut, _)) => Cow::Owned(format!("{}...", text[..cut].trim_end())),
    }
}

/// An immutable natural-language request.
///
/// Highlight terms are carried through for the presentation layer and have
/// no effect on how the query is processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    highlight_terms: Vec<String>,
}

impl Query {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlight_terms: Vec::new(),
        }
    }

    pub fn with_highlights(mut self, terms: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.highlight_terms = terms.into_iter().map(Into::into).collect();
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn highlight_terms(&self) -> &[String] {
        &self.highlight_terms
    }

    /// Query text shortened for logging
    pub fn preview(&self) -> Cow<'_, str> {
        preview(&self.text, LOG_PREVIEW_CHARS)
    }

    /// Empty or whitespace-only queries never reach a gateway.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

impl From<&str> for Query {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Query {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
