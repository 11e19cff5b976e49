//! Domain layer for marketing-analyst
//!
//! This crate contains the core entities and value objects of the analyst
//! agent. It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Tools
//!
//! A tool is a named, schema-typed capability ([`ToolDefinition`] +
//! [`ToolHandler`]) that the agent may invoke to gather structured data
//! before answering. Invocations ([`ToolCall`]) are validated and coerced by
//! a [`ToolValidator`] and always produce a [`ToolResult`].
//!
//! ## Decisions
//!
//! Each round the model gateway returns a [`Decision`]: either a direct
//! answer or exactly one tool call.
//!
//! ## Conversation
//!
//! [`ConversationMemory`] is an append-only log of [`ConversationTurn`]s owned
//! by the caller's session. Every query ends in a [`ResponseEnvelope`].

pub mod agent;
pub mod config;
pub mod core;
pub mod prompt;
pub mod session;
pub mod tool;

// Re-export commonly used types
pub use agent::{decision::Decision, phase::QueryPhase};
pub use config::{AgentMode, OutputFormat};
pub use core::{
    error::ConfigurationError,
    query::{Query, preview},
    validation::{ConfigIssue, Severity},
};
pub use prompt::{AnalystPromptTemplate, Observation, Prompt};
pub use session::{
    entities::{ConversationMemory, ConversationTurn, Role},
    envelope::ResponseEnvelope,
};
pub use tool::{
    entities::{ParamType, ToolArguments, ToolCall, ToolDefinition, ToolParameter},
    handler::ToolHandler,
    traits::{DefaultToolValidator, SchemaValidationError, ToolValidator, undeclared_arguments},
    value_objects::{ToolError, ToolResult},
};
