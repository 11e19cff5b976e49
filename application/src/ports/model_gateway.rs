//! Model Gateway port
//!
//! Defines the decision capability the orchestrator consults each round.

use analyst_domain::{Decision, Prompt};
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while obtaining a decision
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Model returned neither text nor a tool call")]
    EmptyResponse,

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// A panic caught at the orchestrator boundary
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for model decisions
///
/// Given the assembled prompt (system role, tool descriptions, history,
/// query and observations so far), returns either a direct answer or one
/// tool call. Implementations are read-only after construction and may be
/// shared across sessions.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &str;

    /// Decide the next step for the prompt
    async fn decide(&self, prompt: &Prompt) -> Result<Decision, GatewayError>;
}
