//! OpenAI-compatible chat completions client
//!
//! Speaks the `/chat/completions` wire format with function-style tools, so
//! it also works against compatible gateways reachable through `base_url`.

use std::collections::HashMap;

use analyst_application::{
    GatewayError, InferenceClient, InferenceCompletion, InferenceMessage, InferenceRequest,
};
use analyst_domain::{ConfigurationError, ToolCall};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::FileProviderConfig;
use crate::tools::schema::input_schema;

// ==================== Wire types ====================

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<ChatTool>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_calls: Option<Vec<ChatToolCall>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_call_id: Option<String>,
}

impl ChatMessage {
    fn text(role: &'static str, content: impl Into<String>) -> Self {
        Self {
            role,
            content: Some(content.into()),
            tool_calls: None,
            tool_call_id: None,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatTool {
    #[serde(rename = "type")]
    kind: &'static str,
    function: ChatFunction,
}

#[derive(Debug, Serialize)]
struct ChatFunction {
    name: String,
    description: String,
    parameters: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChatToolCall {
    id: String,
    #[serde(rename = "type", default = "function_kind")]
    kind: String,
    function: ChatFunctionCall,
}

fn function_kind() -> String {
    "function".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChatFunctionCall {
    name: String,
    /// JSON-encoded argument object
    arguments: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
    #[serde(default)]
    tool_calls: Vec<ChatToolCall>,
}

// ==================== Translation ====================

fn to_wire(request: InferenceRequest) -> ChatRequest {
    let mut messages = vec![ChatMessage::text("system", request.system)];

    for message in request.messages {
        messages.push(match message {
            InferenceMessage::User(text) => ChatMessage::text("user", text),
            InferenceMessage::Assistant(text) => ChatMessage::text("assistant", text),
            InferenceMessage::ToolCall { id, call } => ChatMessage {
                role: "assistant",
                content: None,
                tool_calls: Some(vec![ChatToolCall {
                    id,
                    kind: function_kind(),
                    function: ChatFunctionCall {
                        arguments: serde_json::to_string(&call.arguments)
                            .unwrap_or_else(|_| "{}".to_string()),
                        name: call.tool_name,
                    },
                }]),
                tool_call_id: None,
            },
            InferenceMessage::ToolResult { id, content } => ChatMessage {
                role: "tool",
                content: Some(content),
                tool_calls: None,
                tool_call_id: Some(id),
            },
        });
    }

    let tools = request
        .tools
        .iter()
        .map(|tool| ChatTool {
            kind: "function",
            function: ChatFunction {
                name: tool.name.clone(),
                description: tool.description.clone(),
                parameters: input_schema(tool),
            },
        })
        .collect();

    ChatRequest {
        model: request.model,
        messages,
        temperature: request.temperature,
        max_tokens: request.max_output_tokens,
        tools,
    }
}

fn from_wire(response: ChatResponse) -> Result<InferenceCompletion, GatewayError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| GatewayError::InvalidResponse("No choices in response".to_string()))?;

    let tool_calls = choice
        .message
        .tool_calls
        .into_iter()
        .map(|tc| {
            if tc.function.arguments.trim().is_empty() {
                return ToolCall::new(tc.function.name);
            }
            match serde_json::from_str::<HashMap<String, Value>>(&tc.function.arguments) {
                Ok(arguments) => ToolCall::new(tc.function.name).with_arguments(arguments),
                Err(e) => {
                    warn!(tool = %tc.function.name, "Malformed tool arguments: {}", e);
                    let reason = format!("Malformed arguments for '{}': {}", tc.function.name, e);
                    ToolCall::malformed(tc.function.name, reason)
                }
            }
        })
        .collect();

    Ok(InferenceCompletion {
        text: choice.message.content,
        tool_calls,
    })
}

fn map_transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_connect() {
        GatewayError::ConnectionError(e.to_string())
    } else {
        GatewayError::RequestFailed(e.to_string())
    }
}

// ==================== Client ====================

pub struct OpenAiInferenceClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl OpenAiInferenceClient {
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            api_key: api_key.into(),
        }
    }

    /// Build a client from the `[provider]` section, reading the API key
    /// from the configured environment variable.
    pub fn from_config(config: &FileProviderConfig) -> Result<Self, ConfigurationError> {
        let api_key = config
            .api_key()
            .ok_or_else(|| ConfigurationError::MissingEnvironment {
                name: config.api_key_env.clone(),
                message: "required for live mode".to_string(),
            })?;
        Ok(Self::new(&config.base_url, api_key))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl InferenceClient for OpenAiInferenceClient {
    async fn complete(
        &self,
        request: InferenceRequest,
    ) -> Result<InferenceCompletion, GatewayError> {
        let body = to_wire(request);
        debug!(endpoint = %self.endpoint, model = %body.model, "POST chat completion");

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GatewayError::RequestFailed(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        from_wire(parsed)
    }
}
