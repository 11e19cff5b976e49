//! Agent configuration from TOML (`[agent]` section)

use analyst_application::AgentSettings;
use analyst_domain::{AgentMode, ConfigIssue};
use serde::{Deserialize, Serialize};

/// Raw agent configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAgentConfig {
    /// `live` or `substitute`
    pub mode: AgentMode,
    /// Model identifier sent to the inference provider
    pub model: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
    /// Emit per-round trace events
    pub tracing: bool,
}

impl Default for FileAgentConfig {
    fn default() -> Self {
        let settings = AgentSettings::default();
        Self {
            mode: settings.mode,
            model: settings.model,
            temperature: settings.temperature,
            max_output_tokens: settings.max_output_tokens,
            tracing: settings.tracing_enabled,
        }
    }
}

impl FileAgentConfig {
    pub fn to_settings(&self) -> AgentSettings {
        AgentSettings::default()
            .with_mode(self.mode)
            .with_model(self.model.clone())
            .with_temperature(self.temperature)
            .with_max_output_tokens(self.max_output_tokens)
            .with_tracing(self.tracing)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if !(0.0..=2.0).contains(&self.temperature) {
            issues.push(ConfigIssue::error(
                "agent.temperature",
                format!("temperature {} is outside [0, 2]", self.temperature),
            ));
        }
        if self.max_output_tokens == 0 {
            issues.push(ConfigIssue::error(
                "agent.max_output_tokens",
                "max_output_tokens cannot be 0",
            ));
        }
        if self.model.trim().is_empty() {
            issues.push(ConfigIssue::error("agent.model", "model name cannot be empty"));
        }
        issues
    }
}
