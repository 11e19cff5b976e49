//! Agent mode: live inference or deterministic substitute responses.
//!
//! The mode is chosen once when the orchestrator is constructed and never
//! changes for its lifetime.
//!
//! ```
//! use analyst_domain::AgentMode;
//!
//! let mode: AgentMode = "live".parse().unwrap();
//! assert!(mode.is_live());
//! assert_eq!(AgentMode::default(), AgentMode::Substitute);
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentMode {
    /// Real language-model calls; the model may request tool calls.
    Live,
    /// Canned keyword-matched answers with no external calls.
    #[default]
    Substitute,
}

impl AgentMode {
    pub fn as_str(&self) -> &str {
        match self {
            AgentMode::Live => "live",
            AgentMode::Substitute => "substitute",
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, AgentMode::Live)
    }
}

impl std::str::FromStr for AgentMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "live" => Ok(AgentMode::Live),
            "substitute" | "debug" | "mock" => Ok(AgentMode::Substitute),
            _ => Err(format!("Invalid AgentMode: {}", s)),
        }
    }
}

impl std::fmt::Display for AgentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
