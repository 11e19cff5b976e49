//! Processing phases of a single query.
//!
//! ```text
//! Idle → Deciding → (ToolDispatch ⇄ Deciding)* → Synthesizing → Done
//!                                  any phase → Failed
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryPhase {
    Idle,
    Deciding,
    ToolDispatch,
    Synthesizing,
    Done,
    Failed,
}

impl QueryPhase {
    pub fn as_str(&self) -> &str {
        match self {
            QueryPhase::Idle => "idle",
            QueryPhase::Deciding => "deciding",
            QueryPhase::ToolDispatch => "tool_dispatch",
            QueryPhase::Synthesizing => "synthesizing",
            QueryPhase::Done => "done",
            QueryPhase::Failed => "failed",
        }
    }
}

impl std::fmt::Display for QueryPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
