//! Port for per-round trace events.
//!
//! Separate from `tracing` diagnostics: this captures one machine-readable
//! record per decision round. The orchestrator only emits events when
//! tracing is enabled in [`AgentSettings`](crate::config::AgentSettings).

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One decide/dispatch round of a query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundEvent {
    pub query: String,
    pub round: usize,
    /// `"direct_answer"`, `"tool_call"` or `"gateway_error"`
    pub decision: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_name: Option<String>,
    pub duration_ms: u64,
    pub timestamp: DateTime<Utc>,
}

/// Port for recording round events.
///
/// `record` is synchronous and non-fallible; sinks swallow their own write
/// failures so tracing never changes the outcome of a query.
pub trait TraceSink: Send + Sync {
    fn record(&self, event: RoundEvent);
}

/// No-op implementation for tests and when no sink is configured.
pub struct NoTraceSink;

impl TraceSink for NoTraceSink {
    fn record(&self, _event: RoundEvent) {}
}
