//! Agent settings consumed by the orchestrator.

use analyst_domain::AgentMode;
use serde::{Deserialize, Serialize};

/// Settings handed to the orchestrator by the bootstrap layer.
///
/// `mode` is chosen once; an orchestrator never switches mode between
/// queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSettings {
    pub mode: AgentMode,
    pub model: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub tracing_enabled: bool,
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            mode: AgentMode::default(),
            model: "gpt-4".to_string(),
            temperature: 0.2,
            max_output_tokens: 2000,
            tracing_enabled: true,
        }
    }
}

impl AgentSettings {
    pub fn with_mode(mut self, mode: AgentMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_output_tokens(mut self, max: u32) -> Self {
        self.max_output_tokens = max;
        self
    }

    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.tracing_enabled = enabled;
        self
    }

    pub fn is_live(&self) -> bool {
        self.mode.is_live()
    }
}
