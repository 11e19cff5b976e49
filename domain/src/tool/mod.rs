//! Tool domain module
//!
//! This module defines how the analyst agent gathers structured data: every
//! tool is a [`ToolDefinition`] (name, description, typed parameters) paired
//! with a [`ToolHandler`] that computes a JSON payload.
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌───────────────┐    ┌──────────────┐
//! │ ToolCall     │───▶│ ToolValidator│───▶│ ToolHandler   │───▶│ ToolResult   │
//! │ (request)    │    │ (coerce)     │    │ (execute)     │    │ (output)     │
//! └──────────────┘    └──────────────┘    └───────────────┘    └──────────────┘
//! ```
//!
//! Validation failures and handler errors are both folded into a failed
//! [`ToolResult`]; nothing in this pipeline aborts a query.
//!
//! # Key Types
//!
//! - [`ToolDefinition`] / [`ToolParameter`] / [`ParamType`]: input schema
//! - [`ToolCall`]: an invocation request with raw arguments
//! - [`ToolArguments`]: validated, coerced arguments handed to the handler
//! - [`ToolResult`] / [`ToolError`]: execution outcome
//! - [`ToolValidator`]: pure schema validation and coercion

pub mod entities;
pub mod handler;
pub mod traits;
pub mod value_objects;

pub use entities::{ParamType, ToolArguments, ToolCall, ToolDefinition, ToolParameter};
pub use handler::ToolHandler;
pub use traits::{DefaultToolValidator, SchemaValidationError, ToolValidator, undeclared_arguments};
pub use value_objects::{ToolError, ToolResult};
