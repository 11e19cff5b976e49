//! Model gateway implementations
//!
//! - [`LiveModelGateway`]: consults an external model through an
//!   [`InferenceClient`](analyst_application::InferenceClient)
//! - [`SubstituteModelGateway`]: deterministic keyword-matched answers,
//!   never calls tools

mod live;
mod substitute;

pub use live::LiveModelGateway;
pub use substitute::SubstituteModelGateway;
