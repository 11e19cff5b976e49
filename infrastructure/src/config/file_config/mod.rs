//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod agent;
mod execution;
mod output;
mod provider;
mod trace;

pub use agent::FileAgentConfig;
pub use execution::FileExecutionConfig;
pub use output::FileOutputConfig;
pub use provider::FileProviderConfig;
pub use trace::FileTraceConfig;

use analyst_domain::{ConfigIssue, ConfigurationError};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Mode and model settings
    pub agent: FileAgentConfig,
    /// Decision loop limits
    pub execution: FileExecutionConfig,
    /// Live inference endpoint
    pub provider: FileProviderConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Round trace file
    pub trace: FileTraceConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.agent.validate());
        issues.extend(self.execution.validate());
        issues.extend(self.provider.validate());
        issues
    }

    /// Check that the environment can serve the configured mode.
    ///
    /// Live mode needs an API key in the configured variable; substitute mode
    /// makes no external calls and skips the check.
    pub fn validate_environment(&self) -> Result<(), ConfigurationError> {
        if !self.agent.mode.is_live() {
            return Ok(());
        }
        match self.provider.api_key() {
            Some(_) => Ok(()),
            None => Err(ConfigurationError::MissingEnvironment {
                name: self.provider.api_key_env.clone(),
                message: "live mode requires an API key; set it or use --mode substitute"
                    .to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analyst_domain::{AgentMode, OutputFormat, Severity};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[agent]
mode = "live"
model = "gpt-4o-mini"
temperature = 0.5
tracing = false

[execution]
max_rounds = 3
decision_timeout_secs = 20

[provider]
base_url = "http://localhost:8080/v1"

[output]
format = "json"
color = false

[trace]
path = "/tmp/rounds.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.agent.mode, AgentMode::Live);
        assert_eq!(config.agent.model, "gpt-4o-mini");
        assert!(!config.agent.tracing);
        assert_eq!(config.agent.max_output_tokens, 2000);
        assert_eq!(config.execution.max_rounds, 3);
        assert_eq!(config.provider.base_url, "http://localhost:8080/v1");
        assert_eq!(config.provider.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.color);
        assert!(config.trace.path.is_some());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config, FileConfig::default());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_collects_all_issues() {
        let mut config = FileConfig::default();
        config.agent.temperature = 3.0;
        config.agent.max_output_tokens = 0;
        config.execution.max_rounds = 0;
        config.execution.decision_timeout_secs = 0;

        let issues = config.validate();
        assert_eq!(issues.len(), 4);
        assert!(issues.iter().all(|i| i.severity == Severity::Error));
        assert!(issues.iter().any(|i| i.field == "agent.temperature"));
    }

    #[test]
    fn test_validate_environment_substitute_skips_check() {
        let mut config = FileConfig::default();
        config.provider.api_key_env = "ANALYST_TEST_KEY_THAT_IS_NEVER_SET".to_string();
        assert!(config.validate_environment().is_ok());
    }

    #[test]
    fn test_validate_environment_live_requires_key() {
        let mut config = FileConfig::default();
        config.agent.mode = AgentMode::Live;
        config.provider.api_key_env = "ANALYST_TEST_KEY_THAT_IS_NEVER_SET".to_string();

        let err = config.validate_environment().unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::MissingEnvironment { ref name, .. }
                if name == "ANALYST_TEST_KEY_THAT_IS_NEVER_SET"
        ));
    }
}
