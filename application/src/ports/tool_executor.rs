//! Tool Executor port
//!
//! Defines how the orchestrator lists and invokes tools.

use analyst_domain::{ToolCall, ToolDefinition, ToolResult};
use async_trait::async_trait;

/// Port for tool execution
///
/// Implementations never fail out of [`invoke`](Self::invoke): validation
/// errors and executor failures come back as a failed [`ToolResult`].
#[async_trait]
pub trait ToolExecutorPort: Send + Sync {
    /// Definitions of all tools, in registration order
    fn describe_all(&self) -> Vec<ToolDefinition>;

    /// Check if a tool is available
    fn has_tool(&self, name: &str) -> bool;

    /// Get names of all available tools
    fn available_tools(&self) -> Vec<String> {
        self.describe_all().into_iter().map(|d| d.name).collect()
    }

    /// Validate arguments and run the tool
    async fn invoke(&self, call: &ToolCall) -> ToolResult;
}
