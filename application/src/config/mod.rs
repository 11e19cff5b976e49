//! Application-level configuration.
//!
//! - [`AgentSettings`]: model and mode settings, fixed per orchestrator
//! - [`ExecutionParams`]: decision loop control (round cap)

pub mod agent_settings;
pub mod execution_params;

pub use agent_settings::AgentSettings;
pub use execution_params::ExecutionParams;
