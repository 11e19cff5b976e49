//! Tool handler abstraction
//!
//! A [`ToolHandler`] is the execution entrypoint of a tool. Handlers receive
//! arguments that have already been validated and coerced against their own
//! [`ToolDefinition`], so they only deal with domain failures.

use serde_json::Value;

use super::entities::{ToolArguments, ToolDefinition};
use super::value_objects::ToolError;

/// Executable capability behind a registered tool.
///
/// Handlers are shared read-only across all queries of a session and must
/// not hold per-query state.
pub trait ToolHandler: Send + Sync {
    /// Name, description, and input schema of this tool
    fn definition(&self) -> ToolDefinition;

    /// Compute the tool's structured payload
    fn execute(&self, args: &ToolArguments) -> Result<Value, ToolError>;
}
