//! Output formatting for response envelopes

pub mod console;
