//! Execution parameters for decision loop control.
//!
//! [`ExecutionParams`] groups the static parameters that bound the
//! decide/dispatch loop in [`Orchestrator`](crate::use_cases::orchestrator::Orchestrator).
//! The per-call decision timeout belongs to the live gateway, not to the loop.

use serde::{Deserialize, Serialize};

/// Decision loop control parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionParams {
    /// Maximum decide/dispatch rounds per query before answering from
    /// partial results.
    pub max_rounds: usize,
}

impl Default for ExecutionParams {
    fn default() -> Self {
        Self { max_rounds: 5 }
    }
}

impl ExecutionParams {
    // ==================== Builder Methods ====================

    pub fn with_max_rounds(mut self, max: usize) -> Self {
        self.max_rounds = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_cap() {
        assert_eq!(ExecutionParams::default().max_rounds, 5);
    }

    #[test]
    fn test_builder() {
        let params = ExecutionParams::default().with_max_rounds(2);
        assert_eq!(params.max_rounds, 2);
    }
}
