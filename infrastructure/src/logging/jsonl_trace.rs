//! JSONL file writer for round events.
//!
//! Each [`RoundEvent`] is serialized as a single JSON line tagged with
//! `"type": "round"` and appended to the file via a buffered writer.

use analyst_application::ports::trace_sink::{RoundEvent, TraceSink};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// JSONL trace sink that appends one JSON object per round.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes on `Drop`.
pub struct JsonlTraceSink {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlTraceSink {
    /// Open (or create) the trace file for appending.
    ///
    /// Creates parent directories if needed. Returns `None` if the file
    /// cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create trace directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open trace file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the trace file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TraceSink for JsonlTraceSink {
    fn record(&self, event: RoundEvent) {
        let mut record = match serde_json::to_value(&event) {
            Ok(serde_json::Value::Object(map)) => map,
            Ok(_) => return,
            Err(e) => {
                warn!("Could not serialize round event: {}", e);
                return;
            }
        };
        record.insert(
            "type".to_string(),
            serde_json::Value::String("round".to_string()),
        );

        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            if let Err(e) = writeln!(writer, "{}", line) {
                warn!("Could not write round event to {}: {}", self.path.display(), e);
                return;
            }
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlTraceSink {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn event(round: usize, tool_name: Option<&str>) -> RoundEvent {
        RoundEvent {
            query: "Analyze mobile gaming market trends".to_string(),
            round,
            decision: if tool_name.is_some() {
                "tool_call"
            } else {
                "direct_answer"
            },
            tool_name: tool_name.map(String::from),
            duration_ms: 12,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_jsonl_trace_writes_valid_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.jsonl");
        let sink = JsonlTraceSink::new(&path).unwrap();

        sink.record(event(1, Some("market_trend_analysis")));
        sink.record(event(2, None));
        drop(sink);

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.trim().lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["type"], "round");
        assert_eq!(first["round"], 1);
        assert_eq!(first["decision"], "tool_call");
        assert_eq!(first["tool_name"], "market_trend_analysis");
        assert!(first.get("timestamp").is_some());

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["decision"], "direct_answer");
        assert!(second.get("tool_name").is_none());
    }

    #[test]
    fn test_jsonl_trace_appends_across_sinks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("trace.jsonl");

        JsonlTraceSink::new(&path).unwrap().record(event(1, None));
        JsonlTraceSink::new(&path).unwrap().record(event(1, None));

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn test_jsonl_trace_returns_none_for_directory_path() {
        let dir = tempfile::tempdir().unwrap();
        assert!(JsonlTraceSink::new(dir.path()).is_none());
    }
}
