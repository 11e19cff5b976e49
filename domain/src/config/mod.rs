//! Configuration value objects for the domain layer
//!
//! These are domain concepts related to configuration that are
//! used across multiple layers.

mod agent_mode;
mod output_format;

pub use agent_mode::AgentMode;
pub use output_format::OutputFormat;
