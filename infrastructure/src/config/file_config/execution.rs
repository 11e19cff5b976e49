//! Execution configuration from TOML (`[execution]` section)

use analyst_application::ExecutionParams;
use analyst_domain::ConfigIssue;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw execution configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileExecutionConfig {
    /// Maximum decide/dispatch rounds per query
    pub max_rounds: usize,
    /// Timeout for one live decision call
    pub decision_timeout_secs: u64,
}

impl Default for FileExecutionConfig {
    fn default() -> Self {
        Self {
            max_rounds: ExecutionParams::default().max_rounds,
            decision_timeout_secs: 60,
        }
    }
}

impl FileExecutionConfig {
    pub fn to_params(&self) -> ExecutionParams {
        ExecutionParams::default().with_max_rounds(self.max_rounds)
    }

    /// Upper bound for one live decision call
    pub fn decision_timeout(&self) -> Duration {
        Duration::from_secs(self.decision_timeout_secs)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.max_rounds == 0 {
            issues.push(ConfigIssue::error(
                "execution.max_rounds",
                "max_rounds cannot be 0",
            ));
        }
        if self.decision_timeout_secs == 0 {
            issues.push(ConfigIssue::error(
                "execution.decision_timeout_secs",
                "decision_timeout_secs cannot be 0",
            ));
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_params() {
        let config = FileExecutionConfig::default();
        assert_eq!(config.to_params(), ExecutionParams::default());
        assert_eq!(config.decision_timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_zero_values_are_errors() {
        let config = FileExecutionConfig {
            max_rounds: 0,
            decision_timeout_secs: 0,
        };
        let issues = config.validate();

        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.is_error()));
    }
}
