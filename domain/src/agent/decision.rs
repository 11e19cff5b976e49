//! Gateway decisions.
//!
//! A decision is a closed set of variants so the orchestrator can match
//! exhaustively instead of probing a loosely-typed response.

use crate::tool::entities::ToolCall;
use serde::{Deserialize, Serialize};

/// Outcome of one gateway consultation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Decision {
    /// The model answered; no further tool use is requested.
    DirectAnswer { text: String },
    /// The model wants exactly one tool invoked before deciding again.
    ToolCall { call: ToolCall },
}

impl Decision {
    pub fn direct(text: impl Into<String>) -> Self {
        Decision::DirectAnswer { text: text.into() }
    }

    pub fn tool(call: ToolCall) -> Self {
        Decision::ToolCall { call }
    }

    /// Short label used in logs and trace events.
    pub fn kind(&self) -> &'static str {
        match self {
            Decision::DirectAnswer { .. } => "direct_answer",
            Decision::ToolCall { .. } => "tool_call",
        }
    }

    pub fn tool_name(&self) -> Option<&str> {
        match self {
            Decision::ToolCall { call } => Some(&call.tool_name),
            Decision::DirectAnswer { .. } => None,
        }
    }
}
