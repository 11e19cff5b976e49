//! Tool domain value objects: immutable result and error types
//!
//! Every invocation produces exactly one [`ToolResult`]. Failures carry a
//! coded [`ToolError`] so a live model can read what went wrong and retry
//! with corrected arguments on a later round.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error that occurred during tool dispatch or execution.
///
/// | Code | Raised by | Description |
/// |------|-----------|-------------|
/// | `INVALID_ARGUMENT` | validator / orchestrator | Missing, non-coercible, or unreadable arguments |
/// | `UNKNOWN_TOOL` | orchestrator / registry | No tool registered under that name |
/// | `EXECUTION_FAILED` | handler | The tool itself failed or panicked |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolError {
    /// Error code (e.g., "UNKNOWN_TOOL", "INVALID_ARGUMENT")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ToolError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    // Common error constructors
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new("INVALID_ARGUMENT", message)
    }

    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::new("UNKNOWN_TOOL", format!("Unknown tool: {}", name.into()))
    }

    pub fn execution_failed(message: impl Into<String>) -> Self {
        Self::new("EXECUTION_FAILED", message)
    }

    pub fn is_unknown_tool(&self) -> bool {
        self.code == "UNKNOWN_TOOL"
    }
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(details) = &self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for ToolError {}

/// Result of one tool invocation.
///
/// A successful result carries the tool's structured payload; a failed one
/// carries [`Value::Null`] and a populated [`error`](Self::error).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    /// Name of the tool that was requested
    pub tool_name: String,
    /// Whether the execution was successful
    pub succeeded: bool,
    /// Structured output (null on failure)
    #[serde(default)]
    pub payload: Value,
    /// Error information (for failed execution)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ToolError>,
    /// Duration of execution in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl ToolResult {
    /// Create a successful result
    pub fn success(tool_name: impl Into<String>, payload: Value) -> Self {
        Self {
            tool_name: tool_name.into(),
            succeeded: true,
            payload,
            error: None,
            duration_ms: None,
        }
    }

    /// Create a failed result
    pub fn failure(tool_name: impl Into<String>, error: ToolError) -> Self {
        Self {
            tool_name: tool_name.into(),
            succeeded: false,
            payload: Value::Null,
            error: Some(error),
            duration_ms: None,
        }
    }

    /// Add duration metadata
    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    pub fn is_success(&self) -> bool {
        self.succeeded
    }

    pub fn error(&self) -> Option<&ToolError> {
        self.error.as_ref()
    }

    /// Error text for a failed result, empty for a successful one.
    pub fn error_message(&self) -> String {
        self.error.as_ref().map(|e| e.to_string()).unwrap_or_default()
    }

    /// The payload's `analysis_summary` field, when the tool produced one.
    pub fn summary(&self) -> Option<&str> {
        self.payload.get("analysis_summary").and_then(|v| v.as_str())
    }

    /// Text fed back to the model as the observation for this result.
    pub fn observation_text(&self) -> String {
        if self.succeeded {
            serde_json::to_string(&self.payload).unwrap_or_else(|_| self.payload.to_string())
        } else {
            format!("Error: {}", self.error_message())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tool_error() {
        let err = ToolError::unknown_tool("market_forecast").with_details("not registered");

        assert_eq!(err.code, "UNKNOWN_TOOL");
        assert!(err.is_unknown_tool());
        assert!(err.message.contains("market_forecast"));
        assert_eq!(
            err.to_string(),
            "[UNKNOWN_TOOL] Unknown tool: market_forecast (not registered)"
        );
    }

    #[test]
    fn test_tool_result_success() {
        let result = ToolResult::success(
            "market_trend_analysis",
            json!({"analysis_summary": "Growing market"}),
        )
        .with_duration(4);

        assert!(result.is_success());
        assert!(result.error().is_none());
        assert_eq!(result.error_message(), "");
        assert_eq!(result.summary(), Some("Growing market"));
        assert_eq!(result.duration_ms, Some(4));
    }

    #[test]
    fn test_tool_result_failure() {
        let result = ToolResult::failure(
            "competitor_analysis",
            ToolError::invalid_argument("Missing required parameter 'competitors'"),
        );

        assert!(!result.is_success());
        assert_eq!(result.payload, Value::Null);
        assert!(!result.error_message().is_empty());
        assert!(result.observation_text().starts_with("Error: [INVALID_ARGUMENT]"));
    }
}
