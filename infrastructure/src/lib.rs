//! Infrastructure layer for marketing-analyst
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the tool registry and built-in tools, both
//! model gateways, the OpenAI-compatible inference client, the JSONL trace
//! sink, and configuration file loading.

pub mod config;
pub mod gateway;
pub mod logging;
pub mod providers;
pub mod tools;

// Re-export commonly used types
pub use config::{
    ConfigLoadError, ConfigLoader, FileAgentConfig, FileConfig, FileExecutionConfig,
    FileOutputConfig, FileProviderConfig, FileTraceConfig,
};
pub use gateway::{LiveModelGateway, SubstituteModelGateway};
pub use logging::JsonlTraceSink;
#[cfg(feature = "openai")]
pub use providers::openai::OpenAiInferenceClient;
pub use tools::{ToolRegistry, default_registry};
