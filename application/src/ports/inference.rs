//! Inference port
//!
//! Narrow request/response contract with an external language model. The
//! live model gateway translates a [`Prompt`](analyst_domain::Prompt) into an
//! [`InferenceRequest`] and interprets the [`InferenceCompletion`].

use super::model_gateway::GatewayError;
use analyst_domain::{ToolCall, ToolDefinition};
use async_trait::async_trait;

/// One message in an inference conversation
#[derive(Debug, Clone, PartialEq)]
pub enum InferenceMessage {
    User(String),
    Assistant(String),
    /// A tool call previously requested by the model
    ToolCall { id: String, call: ToolCall },
    /// The observed output of the tool call with the same id
    ToolResult { id: String, content: String },
}

/// A single completion request
#[derive(Debug, Clone, PartialEq)]
pub struct InferenceRequest {
    pub model: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub system: String,
    pub messages: Vec<InferenceMessage>,
    pub tools: Vec<ToolDefinition>,
}

/// What the model returned
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InferenceCompletion {
    pub text: Option<String>,
    pub tool_calls: Vec<ToolCall>,
}

impl InferenceCompletion {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            tool_calls: Vec::new(),
        }
    }

    pub fn tool_calls(calls: Vec<ToolCall>) -> Self {
        Self {
            text: None,
            tool_calls: calls,
        }
    }
}

/// Client for an external inference capability
#[async_trait]
pub trait InferenceClient: Send + Sync {
    async fn complete(&self, request: InferenceRequest)
    -> Result<InferenceCompletion, GatewayError>;
}
