//! Configuration file loading for marketing-analyst
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `ANALYST_*` environment variables (`ANALYST_AGENT__MODE=live`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./analyst.toml` or `./.analyst.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/marketing-analyst/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileAgentConfig, FileConfig, FileExecutionConfig, FileOutputConfig, FileProviderConfig,
    FileTraceConfig,
};
pub use loader::{ConfigLoadError, ConfigLoader};
