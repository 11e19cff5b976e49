//! Inference providers
//!
//! Concrete [`InferenceClient`](analyst_application::InferenceClient)
//! implementations, each behind its own cargo feature.

#[cfg(feature = "openai")]
pub mod openai;
