//! Application layer for marketing-analyst
//!
//! This crate contains the orchestrator use case, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{AgentSettings, ExecutionParams};
pub use ports::{
    inference::{InferenceClient, InferenceCompletion, InferenceMessage, InferenceRequest},
    model_gateway::{GatewayError, ModelGateway},
    tool_executor::ToolExecutorPort,
    trace_sink::{NoTraceSink, RoundEvent, TraceSink},
};
pub use use_cases::orchestrator::Orchestrator;
