//! Logging infrastructure: structured round tracing.
//!
//! Provides [`JsonlTraceSink`], a JSONL file writer that implements the
//! [`TraceSink`](analyst_application::TraceSink) port.

mod jsonl_trace;

pub use jsonl_trace::JsonlTraceSink;
