//! Provider configuration from TOML (`[provider]` section)

use analyst_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// OpenAI-compatible endpoint used in live mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Base URL; `/chat/completions` is appended.
    pub base_url: String,
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
        }
    }
}

impl FileProviderConfig {
    /// Resolve the API key from the configured environment variable.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            issues.push(ConfigIssue::warning(
                "provider.base_url",
                format!("base_url '{}' is not an http(s) URL", self.base_url),
            ));
        }
        issues
    }
}
