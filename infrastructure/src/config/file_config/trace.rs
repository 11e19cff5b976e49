//! Trace configuration from TOML (`[trace]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where round events are written, if anywhere.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTraceConfig {
    pub path: Option<PathBuf>,
}
