//! Live model gateway
//!
//! Translates a [`Prompt`] into an [`InferenceRequest`], bounds the call by
//! the decision timeout, and interprets the completion as a [`Decision`].

use std::sync::Arc;
use std::time::Duration;

use analyst_application::{
    AgentSettings, GatewayError, InferenceClient, InferenceCompletion, InferenceMessage,
    InferenceRequest, ModelGateway,
};
use analyst_domain::{Decision, Prompt, Role};
use async_trait::async_trait;
use tracing::{debug, warn};

pub struct LiveModelGateway {
    client: Arc<dyn InferenceClient>,
    settings: AgentSettings,
    timeout: Duration,
}

impl LiveModelGateway {
    pub fn new(client: Arc<dyn InferenceClient>, settings: AgentSettings, timeout: Duration) -> Self {
        Self {
            client,
            settings,
            timeout,
        }
    }

    fn build_request(&self, prompt: &Prompt) -> InferenceRequest {
        let mut messages: Vec<InferenceMessage> = prompt
            .history
            .iter()
            .map(|turn| match turn.role() {
                Role::User => InferenceMessage::User(turn.content().to_string()),
                Role::Assistant => InferenceMessage::Assistant(turn.content().to_string()),
            })
            .collect();

        messages.push(InferenceMessage::User(prompt.query.clone()));

        for (i, observation) in prompt.observations.iter().enumerate() {
            let id = format!("call_{}", i);
            messages.push(InferenceMessage::ToolCall {
                id: id.clone(),
                call: observation.call.clone(),
            });
            messages.push(InferenceMessage::ToolResult {
                id,
                content: observation.result.observation_text(),
            });
        }

        InferenceRequest {
            model: self.settings.model.clone(),
            temperature: self.settings.temperature,
            max_output_tokens: self.settings.max_output_tokens,
            system: prompt.system.clone(),
            messages,
            tools: prompt.tools.clone(),
        }
    }
}

/// Map a completion onto exactly one decision
fn interpret(completion: InferenceCompletion) -> Result<Decision, GatewayError> {
    let mut calls = completion.tool_calls.into_iter();
    if let Some(first) = calls.next() {
        let ignored: Vec<String> = calls.map(|c| c.tool_name).collect();
        if !ignored.is_empty() {
            warn!(
                "Model requested {} extra tool call(s), only '{}' will run; ignored: {:?}",
                ignored.len(),
                first.tool_name,
                ignored
            );
        }
        return Ok(Decision::tool(first));
    }

    match completion.text {
        Some(text) if !text.trim().is_empty() => Ok(Decision::direct(text)),
        _ => Err(GatewayError::EmptyResponse),
    }
}

#[async_trait]
impl ModelGateway for LiveModelGateway {
    fn name(&self) -> &str {
        "live"
    }

    async fn decide(&self, prompt: &Prompt) -> Result<Decision, GatewayError> {
        let request = self.build_request(prompt);
        debug!(
            model = %request.model,
            messages = request.messages.len(),
            tools = request.tools.len(),
            "Sending inference request"
        );

        let completion = tokio::time::timeout(self.timeout, self.client.complete(request))
            .await
            .map_err(|_| GatewayError::Timeout(self.timeout))??;

        interpret(completion)
    }
}
