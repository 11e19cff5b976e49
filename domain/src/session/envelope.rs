//! Response envelope returned by the orchestrator

use serde::{Deserialize, Serialize};

/// Final result of handling one query (Value Object)
///
/// Always produced, never an error: failures are reported through
/// `success = false` with a populated `error`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub response: String,
    pub success: bool,
    /// Tools dispatched while handling the query, in dispatch order
    pub used_tools: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResponseEnvelope {
    pub fn completed(response: impl Into<String>, used_tools: Vec<String>) -> Self {
        Self {
            response: response.into(),
            success: true,
            used_tools,
            error: None,
        }
    }

    /// Build a failure envelope; the response carries a readable error line.
    pub fn failed(error: impl Into<String>, used_tools: Vec<String>) -> Self {
        let error = error.into();
        Self {
            response: format!("An error occurred: {}", error),
            success: false,
            used_tools,
            error: Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed() {
        let env = ResponseEnvelope::completed("done", vec!["market_trend_analysis".into()]);
        assert!(env.success);
        assert!(env.error.is_none());
        assert_eq!(env.used_tools, vec!["market_trend_analysis"]);
    }

    #[test]
    fn test_failed() {
        let env = ResponseEnvelope::failed("Request timed out", vec![]);
        assert!(!env.success);
        assert_eq!(env.response, "An error occurred: Request timed out");
        assert_eq!(env.error.as_deref(), Some("Request timed out"));
    }

    #[test]
    fn test_error_omitted_from_json_on_success() {
        let json = serde_json::to_value(ResponseEnvelope::completed("ok", vec![])).unwrap();
        assert!(json.get("error").is_none());
        assert_eq!(json["success"], true);
    }
}
