//! Interactive session for asking follow-up questions

mod session;

pub use session::{AnalystRepl, ReplCommand};
