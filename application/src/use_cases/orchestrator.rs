//! Orchestrator use case.
//!
//! Handles one query end to end and always produces a [`ResponseEnvelope`].
//!
//! ```text
//! Idle ─► Deciding ─► (ToolDispatch ⇄ Deciding)* ─► Synthesizing ─► Done
//!   │         │                 │                        │
//!   └─────────┴─────────────────┴──────── Failed ◄───────┘
//! ```
//!
//! - A blank query goes straight to `Synthesizing` with a clarification.
//! - Each round asks the [`ModelGateway`] for one [`Decision`]; a tool call is
//!   dispatched through the [`ToolExecutorPort`] and its result is fed back
//!   into the prompt as an [`Observation`].
//! - When `max_rounds` rounds all end in tool calls, the answer is assembled
//!   from whatever results were collected.
//! - Gateway errors and panics end in `Failed`; the caller still gets an
//!   envelope.
//!
//! Tool failures (schema, unreadable arguments, executor, unknown tool) never
//! fail the query; they are observations the model can correct on a later
//! round.

use crate::config::{AgentSettings, ExecutionParams};
use crate::ports::model_gateway::{GatewayError, ModelGateway};
use crate::ports::tool_executor::ToolExecutorPort;
use crate::ports::trace_sink::{NoTraceSink, RoundEvent, TraceSink};
use analyst_domain::{
    AgentMode, AnalystPromptTemplate, ConversationMemory, Decision, Observation, Prompt, Query,
    QueryPhase, ResponseEnvelope, ToolCall, ToolError, ToolResult,
};
use chrono::Utc;
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Use case for handling a single marketing query.
///
/// The gateway and tool executor are shared read-only; conversation state
/// lives in the [`ConversationMemory`] passed to [`handle`](Self::handle), so
/// one orchestrator can serve independent sessions.
pub struct Orchestrator {
    gateway: Arc<dyn ModelGateway>,
    tools: Arc<dyn ToolExecutorPort>,
    settings: AgentSettings,
    execution: ExecutionParams,
    trace_sink: Arc<dyn TraceSink>,
}

impl Clone for Orchestrator {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            tools: self.tools.clone(),
            settings: self.settings.clone(),
            execution: self.execution.clone(),
            trace_sink: self.trace_sink.clone(),
        }
    }
}

impl Orchestrator {
    pub fn new(
        gateway: Arc<dyn ModelGateway>,
        tools: Arc<dyn ToolExecutorPort>,
        settings: AgentSettings,
    ) -> Self {
        Self {
            gateway,
            tools,
            settings,
            execution: ExecutionParams::default(),
            trace_sink: Arc::new(NoTraceSink),
        }
    }

    pub fn with_execution(mut self, execution: ExecutionParams) -> Self {
        self.execution = execution;
        self
    }

    /// Create with a trace sink for per-round events.
    pub fn with_trace_sink(mut self, sink: Arc<dyn TraceSink>) -> Self {
        self.trace_sink = sink;
        self
    }

    pub fn mode(&self) -> AgentMode {
        self.settings.mode
    }

    pub fn settings(&self) -> &AgentSettings {
        &self.settings
    }

    /// Handle one query against the session's memory.
    ///
    /// On success the exchange is appended to `memory` as one user turn and
    /// one assistant turn. A failed envelope leaves `memory` untouched.
    pub async fn handle(&self, query: &Query, memory: &mut ConversationMemory) -> ResponseEnvelope {
        info!(
            mode = %self.settings.mode,
            gateway = self.gateway.name(),
            "Handling query: {}",
            query.preview()
        );

        let mut phase = QueryPhase::Idle;
        let mut used_tools = Vec::new();

        let outcome = if query.is_blank() {
            debug!("Blank query, answering with a clarification request");
            enter(&mut phase, QueryPhase::Synthesizing);
            Ok(AnalystPromptTemplate::clarification().to_string())
        } else {
            AssertUnwindSafe(self.run_rounds(query, memory, &mut phase, &mut used_tools))
                .catch_unwind()
                .await
                .unwrap_or_else(|panic| Err(GatewayError::Internal(panic_message(panic.as_ref()))))
        };

        match outcome {
            Ok(response) => {
                enter(&mut phase, QueryPhase::Done);
                memory.record_exchange(query.text(), response.as_str());
                info!(used_tools = ?used_tools, "Query completed");
                ResponseEnvelope::completed(response, used_tools)
            }
            Err(e) => {
                enter(&mut phase, QueryPhase::Failed);
                error!("Query failed: {}", e);
                ResponseEnvelope::failed(e.to_string(), used_tools)
            }
        }
    }

    /// Decide/dispatch loop. Returns the final response text.
    async fn run_rounds(
        &self,
        query: &Query,
        memory: &ConversationMemory,
        phase: &mut QueryPhase,
        used_tools: &mut Vec<String>,
    ) -> Result<String, GatewayError> {
        let mut prompt = Prompt::new(self.tools.describe_all(), memory, query.text());
        let max_rounds = self.execution.max_rounds;

        for round in 1..=max_rounds {
            enter(phase, QueryPhase::Deciding);
            let started = Instant::now();
            let decision = match self.gateway.decide(&prompt).await {
                Ok(decision) => decision,
                Err(e) => {
                    self.trace(query, round, "gateway_error", None, started);
                    return Err(e);
                }
            };
            debug!(round, decision = decision.kind(), "Gateway decided");

            match decision {
                Decision::DirectAnswer { text } => {
                    self.trace(query, round, "direct_answer", None, started);
                    enter(phase, QueryPhase::Synthesizing);
                    return Ok(text);
                }
                Decision::ToolCall { call } => {
                    enter(phase, QueryPhase::ToolDispatch);
                    let result = self.dispatch(&call, used_tools).await;
                    self.trace(
                        query,
                        round,
                        "tool_call",
                        Some(call.tool_name.clone()),
                        started,
                    );
                    prompt.push_observation(Observation::new(call, result));
                }
            }
        }

        warn!(
            "Decision loop reached max_rounds ({}), answering from partial results",
            max_rounds
        );
        enter(phase, QueryPhase::Synthesizing);
        Ok(summarize_partial(&prompt.observations))
    }

    /// Run one requested tool. Unknown tools and unreadable arguments become a
    /// failed result and are not counted as used.
    async fn dispatch(&self, call: &ToolCall, used_tools: &mut Vec<String>) -> ToolResult {
        if !self.tools.has_tool(&call.tool_name) {
            warn!(tool = %call.tool_name, "Model requested an unknown tool");
            return ToolResult::failure(&call.tool_name, ToolError::unknown_tool(&call.tool_name));
        }
        if let Some(reason) = &call.argument_error {
            warn!(tool = %call.tool_name, "Tool call arguments unreadable: {}", reason);
            return ToolResult::failure(&call.tool_name, ToolError::invalid_argument(reason));
        }

        used_tools.push(call.tool_name.clone());
        let result = self.tools.invoke(call).await;
        if result.is_success() {
            debug!(tool = %call.tool_name, duration_ms = ?result.duration_ms, "Tool succeeded");
        } else {
            warn!(tool = %call.tool_name, "Tool failed: {}", result.error_message());
        }
        result
    }

    fn trace(
        &self,
        query: &Query,
        round: usize,
        decision: &'static str,
        tool_name: Option<String>,
        started: Instant,
    ) {
        if !self.settings.tracing_enabled {
            return;
        }
        self.trace_sink.record(RoundEvent {
            query: query.text().to_string(),
            round,
            decision,
            tool_name,
            duration_ms: started.elapsed().as_millis() as u64,
            timestamp: Utc::now(),
        });
    }
}

fn enter(phase: &mut QueryPhase, next: QueryPhase) {
    debug!("Phase {} -> {}", phase, next);
    *phase = next;
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    panic
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}

/// Best-effort answer from the results gathered before the round cap.
fn summarize_partial(observations: &[Observation]) -> String {
    let mut text = AnalystPromptTemplate::partial_results_lead_in().to_string();
    for Observation { result, .. } in observations {
        let detail = if !result.is_success() {
            format!("failed ({})", result.error_message())
        } else if let Some(summary) = result.summary() {
            summary.to_string()
        } else {
            result.payload.to_string()
        };
        text.push_str(&format!("\n- {}: {}", result.tool_name, detail));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use analyst_domain::{Role, ToolDefinition, ToolParameter};
    use async_trait::async_trait;
    use serde_json::json;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // ==================== Test Mocks ====================

    struct ScriptedGateway {
        decisions: Mutex<VecDeque<Result<Decision, GatewayError>>>,
        prompts: Mutex<Vec<Prompt>>,
    }

    impl ScriptedGateway {
        fn new(decisions: Vec<Result<Decision, GatewayError>>) -> Self {
            Self {
                decisions: Mutex::new(VecDeque::from(decisions)),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl ModelGateway for ScriptedGateway {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn decide(&self, prompt: &Prompt) -> Result<Decision, GatewayError> {
            self.prompts.lock().unwrap().push(prompt.clone());
            self.decisions
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GatewayError::Other("No more responses".to_string())))
        }
    }

    /// Requests the same tool forever.
    struct AlwaysToolGateway {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ModelGateway for AlwaysToolGateway {
        fn name(&self) -> &str {
            "always-tool"
        }

        async fn decide(&self, _prompt: &Prompt) -> Result<Decision, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Decision::tool(trend_call()))
        }
    }

    /// Panics on the first decision.
    struct PanickingGateway;

    #[async_trait]
    impl ModelGateway for PanickingGateway {
        fn name(&self) -> &str {
            "panicking"
        }

        async fn decide(&self, _prompt: &Prompt) -> Result<Decision, GatewayError> {
            panic!("decision backend crashed");
        }
    }

    struct MockToolExecutor {
        definitions: Vec<ToolDefinition>,
        invocations: AtomicUsize,
    }

    impl MockToolExecutor {
        fn new() -> Self {
            Self {
                definitions: vec![
                    ToolDefinition::new("market_trend_analysis", "Analyze market trends")
                        .with_parameter(ToolParameter::required("market_segment", "Segment"))
                        .with_parameter(ToolParameter::required("time_period", "Period")),
                ],
                invocations: AtomicUsize::new(0),
            }
        }

        fn invocations(&self) -> usize {
            self.invocations.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ToolExecutorPort for MockToolExecutor {
        fn describe_all(&self) -> Vec<ToolDefinition> {
            self.definitions.clone()
        }

        fn has_tool(&self, name: &str) -> bool {
            self.definitions.iter().any(|d| d.name == name)
        }

        async fn invoke(&self, call: &ToolCall) -> ToolResult {
            self.invocations.fetch_add(1, Ordering::SeqCst);
            if call.get_string("market_segment").is_none() {
                return ToolResult::failure(
                    &call.tool_name,
                    ToolError::invalid_argument("Missing required parameter 'market_segment'"),
                );
            }
            ToolResult::success(
                &call.tool_name,
                json!({"analysis_summary": "Growth of 12.5% in the segment."}),
            )
        }
    }

    #[derive(Default)]
    struct RecordingTraceSink {
        events: Mutex<Vec<RoundEvent>>,
    }

    impl TraceSink for RecordingTraceSink {
        fn record(&self, event: RoundEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    fn trend_call() -> ToolCall {
        ToolCall::new("market_trend_analysis")
            .with_arg("market_segment", "mobile gaming")
            .with_arg("time_period", "2024")
    }

    fn live_settings() -> AgentSettings {
        AgentSettings::default().with_mode(AgentMode::Live)
    }

    fn orchestrator(
        gateway: Arc<dyn ModelGateway>,
        tools: Arc<MockToolExecutor>,
    ) -> Orchestrator {
        Orchestrator::new(gateway, tools, live_settings())
    }

    // ==================== Scenarios ====================

    #[tokio::test]
    async fn test_tool_call_then_direct_answer() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            Ok(Decision::tool(trend_call())),
            Ok(Decision::direct("summary")),
        ]));
        let tools = Arc::new(MockToolExecutor::new());
        let orch = orchestrator(gateway.clone(), tools.clone());

        let mut memory = ConversationMemory::new();
        let env = orch
            .handle(&Query::new("How is mobile gaming doing?"), &mut memory)
            .await;

        assert!(env.success);
        assert_eq!(env.response, "summary");
        assert_eq!(env.used_tools, vec!["market_trend_analysis"]);
        assert!(env.error.is_none());
        assert_eq!(tools.invocations(), 1);

        // Second decision saw the tool result
        let prompts = gateway.prompts.lock().unwrap();
        assert_eq!(prompts[0].observations.len(), 0);
        assert_eq!(prompts[1].observations.len(), 1);
        assert!(prompts[1].observations[0].result.is_success());
    }

    #[tokio::test]
    async fn test_round_cap_forces_partial_summary() {
        let gateway = Arc::new(AlwaysToolGateway {
            calls: AtomicUsize::new(0),
        });
        let tools = Arc::new(MockToolExecutor::new());
        let orch = orchestrator(gateway.clone(), tools.clone());

        let mut memory = ConversationMemory::new();
        let env = orch.handle(&Query::new("loop forever"), &mut memory).await;

        assert!(env.success);
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 5);
        assert_eq!(tools.invocations(), 5);
        assert_eq!(env.used_tools.len(), 5);
        assert!(!env.response.is_empty());
        assert!(env.response.starts_with(AnalystPromptTemplate::partial_results_lead_in()));
        assert!(env.response.contains("- market_trend_analysis: Growth of 12.5%"));
    }

    #[tokio::test]
    async fn test_round_cap_is_configurable() {
        let gateway = Arc::new(AlwaysToolGateway {
            calls: AtomicUsize::new(0),
        });
        let tools = Arc::new(MockToolExecutor::new());
        let orch = orchestrator(gateway.clone(), tools)
            .with_execution(ExecutionParams::default().with_max_rounds(2));

        let env = orch
            .handle(&Query::new("loop"), &mut ConversationMemory::new())
            .await;

        assert!(env.success);
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_blank_query_skips_gateway_and_tools() {
        let gateway = Arc::new(ScriptedGateway::new(vec![]));
        let tools = Arc::new(MockToolExecutor::new());
        let orch = orchestrator(gateway.clone(), tools.clone());

        let mut memory = ConversationMemory::new();
        for text in ["", "   \t\n"] {
            let env = orch.handle(&Query::new(text), &mut memory).await;
            assert!(env.success);
            assert_eq!(env.response, AnalystPromptTemplate::clarification());
            assert!(env.used_tools.is_empty());
        }

        assert_eq!(gateway.calls(), 0);
        assert_eq!(tools.invocations(), 0);
        assert_eq!(memory.len(), 4);
    }

    #[tokio::test]
    async fn test_gateway_timeout_fails_envelope() {
        let gateway = Arc::new(ScriptedGateway::new(vec![Err(GatewayError::Timeout(
            std::time::Duration::from_secs(60),
        ))]));
        let tools = Arc::new(MockToolExecutor::new());
        let orch = orchestrator(gateway, tools.clone());

        let mut memory = ConversationMemory::new();
        let env = orch.handle(&Query::new("trends?"), &mut memory).await;

        assert!(!env.success);
        assert!(env.response.contains("error"));
        assert!(env.used_tools.is_empty());
        assert_eq!(env.error.as_deref(), Some("Request timed out after 60s"));
        assert!(memory.is_empty());
        assert_eq!(tools.invocations(), 0);
    }

    #[tokio::test]
    async fn test_gateway_failure_after_tool_keeps_used_tools() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            Ok(Decision::tool(trend_call())),
            Err(GatewayError::ConnectionError("refused".to_string())),
        ]));
        let tools = Arc::new(MockToolExecutor::new());
        let orch = orchestrator(gateway, tools);

        let env = orch
            .handle(&Query::new("trends?"), &mut ConversationMemory::new())
            .await;

        assert!(!env.success);
        assert_eq!(env.used_tools, vec!["market_trend_analysis"]);
        assert_eq!(env.error.as_deref(), Some("Connection error: refused"));
    }

    #[tokio::test]
    async fn test_unknown_tool_is_recoverable() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            Ok(Decision::tool(ToolCall::new("market_forecast"))),
            Ok(Decision::tool(trend_call())),
            Ok(Decision::direct("recovered")),
        ]));
        let tools = Arc::new(MockToolExecutor::new());
        let orch = orchestrator(gateway.clone(), tools.clone());

        let env = orch
            .handle(&Query::new("forecast"), &mut ConversationMemory::new())
            .await;

        assert!(env.success);
        assert_eq!(env.response, "recovered");
        assert_eq!(env.used_tools, vec!["market_trend_analysis"]);
        assert_eq!(tools.invocations(), 1);

        let prompts = gateway.prompts.lock().unwrap();
        let first = &prompts[1].observations[0].result;
        assert!(!first.is_success());
        assert!(first.error().unwrap().is_unknown_tool());
    }

    #[tokio::test]
    async fn test_failed_tool_is_still_used_and_fed_back() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            Ok(Decision::tool(ToolCall::new("market_trend_analysis"))),
            Ok(Decision::direct("asked for a segment")),
        ]));
        let tools = Arc::new(MockToolExecutor::new());
        let orch = orchestrator(gateway.clone(), tools);

        let env = orch
            .handle(&Query::new("trends"), &mut ConversationMemory::new())
            .await;

        assert!(env.success);
        assert_eq!(env.used_tools, vec!["market_trend_analysis"]);
        let prompts = gateway.prompts.lock().unwrap();
        assert!(
            prompts[1].observations[0]
                .result
                .observation_text()
                .starts_with("Error: [INVALID_ARGUMENT]")
        );
    }

    #[tokio::test]
    async fn test_unreadable_arguments_are_fed_back() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            Ok(Decision::tool(ToolCall::malformed(
                "market_trend_analysis",
                "Malformed arguments for 'market_trend_analysis': key must be a string",
            ))),
            Ok(Decision::tool(trend_call())),
            Ok(Decision::direct("retried")),
        ]));
        let tools = Arc::new(MockToolExecutor::new());
        let orch = orchestrator(gateway.clone(), tools.clone());

        let env = orch
            .handle(&Query::new("gaming trends"), &mut ConversationMemory::new())
            .await;

        assert!(env.success);
        assert_eq!(env.response, "retried");
        assert_eq!(env.used_tools, vec!["market_trend_analysis"]);
        assert_eq!(tools.invocations(), 1);

        let prompts = gateway.prompts.lock().unwrap();
        let first = &prompts[1].observations[0].result;
        assert!(!first.is_success());
        assert_eq!(first.error().unwrap().code, "INVALID_ARGUMENT");
        assert!(first.error_message().contains("key must be a string"));
    }

    #[tokio::test]
    async fn test_gateway_panic_becomes_failed_envelope() {
        let orch = orchestrator(Arc::new(PanickingGateway), Arc::new(MockToolExecutor::new()));

        let mut memory = ConversationMemory::new();
        let env = orch.handle(&Query::new("trends?"), &mut memory).await;

        assert!(!env.success);
        assert!(env.used_tools.is_empty());
        assert_eq!(
            env.error.as_deref(),
            Some("Internal error: decision backend crashed")
        );
        assert!(memory.is_empty());
    }

    #[tokio::test]
    async fn test_memory_gains_exactly_two_turns() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            Ok(Decision::direct("first")),
            Ok(Decision::direct("second")),
        ]));
        let tools = Arc::new(MockToolExecutor::new());
        let orch = orchestrator(gateway.clone(), tools);

        let mut memory = ConversationMemory::new();
        orch.handle(&Query::new("X"), &mut memory).await;
        let env = orch.handle(&Query::new("Y"), &mut memory).await;

        assert_eq!(memory.len(), 4);
        let last_two = &memory.turns()[2..];
        assert_eq!(last_two[0].role(), Role::User);
        assert_eq!(last_two[0].content(), "Y");
        assert_eq!(last_two[1].role(), Role::Assistant);
        assert_eq!(last_two[1].content(), env.response);

        // Follow-up prompt carried the earlier exchange
        let prompts = gateway.prompts.lock().unwrap();
        assert_eq!(prompts[1].history.len(), 2);
        assert_eq!(prompts[1].history[0].content(), "X");
    }

    #[tokio::test]
    async fn test_prompt_lists_tools() {
        let gateway = Arc::new(ScriptedGateway::new(vec![Ok(Decision::direct("ok"))]));
        let tools = Arc::new(MockToolExecutor::new());
        let orch = orchestrator(gateway.clone(), tools);

        orch.handle(&Query::new("q"), &mut ConversationMemory::new())
            .await;

        let prompts = gateway.prompts.lock().unwrap();
        assert_eq!(prompts[0].tools.len(), 1);
        assert!(prompts[0].system.contains("market_trend_analysis"));
        assert_eq!(prompts[0].query, "q");
    }

    #[tokio::test]
    async fn test_trace_events_per_round() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            Ok(Decision::tool(trend_call())),
            Ok(Decision::direct("done")),
        ]));
        let sink = Arc::new(RecordingTraceSink::default());
        let orch = orchestrator(gateway, Arc::new(MockToolExecutor::new()))
            .with_trace_sink(sink.clone());

        orch.handle(&Query::new("trace me"), &mut ConversationMemory::new())
            .await;

        let events = sink.events.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].round, 1);
        assert_eq!(events[0].decision, "tool_call");
        assert_eq!(events[0].tool_name.as_deref(), Some("market_trend_analysis"));
        assert_eq!(events[1].decision, "direct_answer");
        assert_eq!(events[1].query, "trace me");
    }

    #[tokio::test]
    async fn test_trace_event_for_failed_round() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            Ok(Decision::tool(trend_call())),
            Err(GatewayError::ConnectionError("refused".to_string())),
        ]));
        let sink = Arc::new(RecordingTraceSink::default());
        let orch = orchestrator(gateway, Arc::new(MockToolExecutor::new()))
            .with_trace_sink(sink.clone());

        let env = orch
            .handle(&Query::new("trace me"), &mut ConversationMemory::new())
            .await;

        assert!(!env.success);
        let events = sink.events.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].round, 2);
        assert_eq!(events[1].decision, "gateway_error");
        assert!(events[1].tool_name.is_none());
    }

    #[tokio::test]
    async fn test_no_trace_events_when_disabled() {
        let gateway = Arc::new(ScriptedGateway::new(vec![Ok(Decision::direct("done"))]));
        let sink = Arc::new(RecordingTraceSink::default());
        let orch = Orchestrator::new(
            gateway,
            Arc::new(MockToolExecutor::new()),
            live_settings().with_tracing(false),
        )
        .with_trace_sink(sink.clone());

        let env = orch
            .handle(&Query::new("quiet"), &mut ConversationMemory::new())
            .await;

        assert!(env.success);
        assert!(sink.events.lock().unwrap().is_empty());
    }

    #[test]
    fn test_summarize_partial_formats() {
        let observations = vec![
            Observation::new(
                trend_call(),
                ToolResult::success("market_trend_analysis", json!({"analysis_summary": "Up"})),
            ),
            Observation::new(
                ToolCall::new("competitor_analysis"),
                ToolResult::success("competitor_analysis", json!({"leader": "A"})),
            ),
            Observation::new(
                ToolCall::new("x"),
                ToolResult::failure("x", ToolError::unknown_tool("x")),
            ),
        ];
        let text = summarize_partial(&observations);

        assert!(text.contains("- market_trend_analysis: Up"));
        assert!(text.contains("- competitor_analysis: {\"leader\":\"A\"}"));
        assert!(text.contains("- x: failed ([UNKNOWN_TOOL] Unknown tool: x)"));
    }
}
