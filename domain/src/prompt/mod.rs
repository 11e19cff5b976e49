//! Prompt domain
//!
//! The [`Prompt`] is everything a model gateway sees for one decision step:
//! system role, ordered tool descriptions, prior turns, the current query and
//! the tool observations collected so far in this query.

mod analyst;

pub use analyst::AnalystPromptTemplate;

use crate::session::entities::{ConversationMemory, ConversationTurn};
use crate::tool::entities::{ToolCall, ToolDefinition};
use crate::tool::value_objects::ToolResult;

/// A tool call paired with its outcome, fed back into the next decision
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub call: ToolCall,
    pub result: ToolResult,
}

impl Observation {
    pub fn new(call: ToolCall, result: ToolResult) -> Self {
        Self { call, result }
    }
}

/// Assembled context for one decision step
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub system: String,
    pub tools: Vec<ToolDefinition>,
    pub history: Vec<ConversationTurn>,
    pub query: String,
    pub observations: Vec<Observation>,
}

impl Prompt {
    /// Build the prompt for the first round of a query.
    pub fn new(
        tools: Vec<ToolDefinition>,
        memory: &ConversationMemory,
        query: impl Into<String>,
    ) -> Self {
        Self {
            system: AnalystPromptTemplate::system(&tools),
            tools,
            history: memory.turns().to_vec(),
            query: query.into(),
            observations: Vec::new(),
        }
    }

    pub fn push_observation(&mut self, observation: Observation) {
        self.observations.push(observation);
    }
}
