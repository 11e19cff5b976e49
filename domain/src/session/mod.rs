//! Conversation session domain.
//!
//! - [`entities::ConversationMemory`]: ordered, append-only log of turns
//! - [`entities::ConversationTurn`]: a single user or assistant turn
//! - [`envelope::ResponseEnvelope`]: the sole result handed back to callers

pub mod entities;
pub mod envelope;
