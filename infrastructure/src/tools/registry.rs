//! Tool Registry
//!
//! The [`ToolRegistry`] holds the analysis tools available to the
//! orchestrator and implements [`ToolExecutorPort`]. It is built once at
//! startup and shared read-only across every query of a session.
//!
//! # Usage
//!
//! ```ignore
//! use analyst_infrastructure::tools::{MarketTrendAnalysis, ToolRegistry};
//!
//! let registry = ToolRegistry::new().with_tool(MarketTrendAnalysis)?;
//!
//! let call = ToolCall::new("market_trend_analysis")
//!     .with_arg("market_segment", "mobile gaming")
//!     .with_arg("time_period", "last_quarter");
//! let result = registry.invoke(&call).await;
//! ```
//!
//! # Failure absorption
//!
//! `invoke` never fails: unknown tools, schema violations, executor errors
//! and executor panics all come back as a failed [`ToolResult`].

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::time::Instant;

use analyst_application::ports::tool_executor::ToolExecutorPort;
use analyst_domain::{
    ConfigurationError, DefaultToolValidator, ToolCall, ToolDefinition, ToolError, ToolHandler,
    ToolResult, ToolValidator, undeclared_arguments,
};
use async_trait::async_trait;
use tracing::{debug, warn};

struct RegisteredTool {
    definition: ToolDefinition,
    handler: Arc<dyn ToolHandler>,
}

/// Ordered set of tools keyed by unique name
pub struct ToolRegistry {
    tools: Vec<RegisteredTool>,
    validator: DefaultToolValidator,
}

impl ToolRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            tools: Vec::new(),
            validator: DefaultToolValidator,
        }
    }

    /// Register a tool handler
    ///
    /// Fails with [`ConfigurationError::DuplicateTool`] if a tool with the
    /// same name is already registered; the registry is left unchanged.
    pub fn register<H: ToolHandler + 'static>(&mut self, handler: H) -> Result<(), ConfigurationError> {
        self.register_arc(Arc::new(handler))
    }

    /// Register a tool handler (Arc version)
    pub fn register_arc(&mut self, handler: Arc<dyn ToolHandler>) -> Result<(), ConfigurationError> {
        let definition = handler.definition();
        if self.find(&definition.name).is_some() {
            return Err(ConfigurationError::DuplicateTool(definition.name));
        }

        debug!(tool = %definition.name, "Registered tool");
        self.tools.push(RegisteredTool {
            definition,
            handler,
        });
        Ok(())
    }

    /// Builder form of [`register`](Self::register)
    pub fn with_tool<H: ToolHandler + 'static>(mut self, handler: H) -> Result<Self, ConfigurationError> {
        self.register(handler)?;
        Ok(self)
    }

    /// Number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    fn find(&self, name: &str) -> Option<&RegisteredTool> {
        self.tools.iter().find(|t| t.definition.name == name)
    }

    fn run(&self, tool: &RegisteredTool, call: &ToolCall) -> ToolResult {
        let name = &tool.definition.name;
        let ignored = undeclared_arguments(call, &tool.definition);
        if !ignored.is_empty() {
            debug!(tool = %name, ignored = ?ignored, "Dropping undeclared arguments");
        }
        let args = match self.validator.validate(call, &tool.definition) {
            Ok(args) => args,
            Err(e) => {
                debug!(tool = %name, error = %e, "Tool arguments rejected");
                return ToolResult::failure(name, ToolError::invalid_argument(e.to_string()));
            }
        };

        let handler = &tool.handler;
        match catch_unwind(AssertUnwindSafe(|| handler.execute(&args))) {
            Ok(Ok(payload)) => ToolResult::success(name, payload),
            Ok(Err(e)) => {
                debug!(tool = %name, error = %e, "Tool returned an error");
                ToolResult::failure(name, e)
            }
            Err(panic) => {
                let message = panic
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| panic.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string());
                warn!(tool = %name, "Tool panicked: {}", message);
                ToolResult::failure(
                    name,
                    ToolError::execution_failed(format!("Tool panicked: {}", message)),
                )
            }
        }
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ToolExecutorPort for ToolRegistry {
    fn describe_all(&self) -> Vec<ToolDefinition> {
        self.tools.iter().map(|t| t.definition.clone()).collect()
    }

    fn has_tool(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    async fn invoke(&self, call: &ToolCall) -> ToolResult {
        let Some(tool) = self.find(&call.tool_name) else {
            return ToolResult::failure(&call.tool_name, ToolError::unknown_tool(&call.tool_name));
        };

        let start = Instant::now();
        let result = self.run(tool, call);
        result.with_duration(start.elapsed().as_millis() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analyst_domain::{ParamType, ToolArguments, ToolParameter};
    use serde_json::{Value, json};

    struct EchoTool;

    impl ToolHandler for EchoTool {
        fn definition(&self) -> ToolDefinition {
            ToolDefinition::new("echo", "Echo the input")
                .with_parameter(ToolParameter::required("text", "Text to echo"))
                .with_parameter(
                    ToolParameter::optional("times", "Repetitions")
                        .with_type(ParamType::Integer)
                        .with_default(1),
                )
        }

        fn execute(&self, args: &ToolArguments) -> Result<Value, ToolError> {
            let text = args.require_str("text").map_err(ToolError::invalid_argument)?;
            let times = args.get_i64("times").unwrap_or(1);
            if text == "fail" {
                return Err(ToolError::execution_failed("asked to fail"));
            }
            Ok(json!({ "echo": text.repeat(times as usize) }))
        }
    }

    struct PanickingTool;

    impl ToolHandler for PanickingTool {
        fn definition(&self) -> ToolDefinition {
            ToolDefinition::new("boom", "Always panics")
        }

        fn execute(&self, _args: &ToolArguments) -> Result<Value, ToolError> {
            panic!("executor exploded");
        }
    }

    struct NamedTool(&'static str);

    impl ToolHandler for NamedTool {
        fn definition(&self) -> ToolDefinition {
            ToolDefinition::new(self.0, "Named tool")
        }

        fn execute(&self, _args: &ToolArguments) -> Result<Value, ToolError> {
            Ok(json!({}))
        }
    }

    #[test]
    fn test_duplicate_registration_leaves_registry_unchanged() {
        let mut registry = ToolRegistry::new();
        registry.register(EchoTool).unwrap();

        let err = registry.register(EchoTool).unwrap_err();
        assert_eq!(err, ConfigurationError::DuplicateTool("echo".to_string()));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.describe_all()[0].description, "Echo the input");
    }

    #[test]
    fn test_describe_all_preserves_registration_order() {
        let registry = ToolRegistry::new()
            .with_tool(NamedTool("zeta"))
            .unwrap()
            .with_tool(NamedTool("alpha"))
            .unwrap()
            .with_tool(NamedTool("mid"))
            .unwrap();

        assert_eq!(registry.available_tools(), vec!["zeta", "alpha", "mid"]);
        assert!(registry.has_tool("alpha"));
        assert!(!registry.has_tool("omega"));
    }

    #[tokio::test]
    async fn test_invoke_success_with_coercion() {
        let registry = ToolRegistry::new().with_tool(EchoTool).unwrap();

        let call = ToolCall::new("echo").with_arg("text", "ab").with_arg("times", "2");
        let result = registry.invoke(&call).await;

        assert!(result.is_success());
        assert_eq!(result.payload["echo"], "abab");
        assert!(result.duration_ms.is_some());
    }

    #[tokio::test]
    async fn test_invoke_schema_violation() {
        let registry = ToolRegistry::new().with_tool(EchoTool).unwrap();

        let result = registry.invoke(&ToolCall::new("echo")).await;

        assert!(!result.is_success());
        let error = result.error().unwrap();
        assert_eq!(error.code, "INVALID_ARGUMENT");
        assert!(error.message.contains("text"));
    }

    #[tokio::test]
    async fn test_invoke_executor_error() {
        let registry = ToolRegistry::new().with_tool(EchoTool).unwrap();

        let result = registry
            .invoke(&ToolCall::new("echo").with_arg("text", "fail"))
            .await;

        assert!(!result.is_success());
        assert_eq!(result.error().unwrap().code, "EXECUTION_FAILED");
    }

    #[tokio::test]
    async fn test_invoke_absorbs_panic() {
        let registry = ToolRegistry::new().with_tool(PanickingTool).unwrap();

        let result = registry.invoke(&ToolCall::new("boom")).await;

        assert!(!result.is_success());
        let error = result.error().unwrap();
        assert_eq!(error.code, "EXECUTION_FAILED");
        assert!(error.message.contains("executor exploded"));
    }

    #[tokio::test]
    async fn test_invoke_unknown_tool() {
        let registry = ToolRegistry::new();

        let result = registry.invoke(&ToolCall::new("missing")).await;

        assert!(!result.is_success());
        assert!(result.error().unwrap().is_unknown_tool());
    }
}
