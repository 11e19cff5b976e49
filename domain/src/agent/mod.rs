//! Agent decision model.
//!
//! - [`decision::Decision`]: what the model gateway wants to do next
//! - [`phase::QueryPhase`]: where a query is in its processing

pub mod decision;
pub mod phase;
