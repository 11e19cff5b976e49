//! Port definitions for the application layer.
//!
//! Ports are the seams between the orchestrator and the outside world;
//! adapters for each live in the infrastructure crate.
//!
//! | Port | Adapter(s) |
//! |------|------------|
//! | [`model_gateway::ModelGateway`] | `LiveModelGateway`, `SubstituteModelGateway` |
//! | [`inference::InferenceClient`] | `OpenAiInferenceClient` |
//! | [`tool_executor::ToolExecutorPort`] | `ToolRegistry` |
//! | [`trace_sink::TraceSink`] | `JsonlTraceSink`, [`trace_sink::NoTraceSink`] |

pub mod inference;
pub mod model_gateway;
pub mod tool_executor;
pub mod trace_sink;
