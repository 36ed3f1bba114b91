//! Append-only line sinks
//!
//! Both on-disk records (conversation log and saved text) are written one line
//! at a time through [`AppendSink`]. Files are opened, appended and closed per
//! write.

use crate::error::AssistResult;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Destination for append-only text lines
pub trait AppendSink: std::fmt::Debug {
    /// Append one line; the newline is added by the sink
    fn append_line(&mut self, line: &str) -> AssistResult<()>;

    /// Human-readable location, used in console messages
    fn describe(&self) -> String;
}

/// Appends lines to a file, creating it if absent
#[derive(Debug, Clone)]
pub struct FileAppender {
    path: PathBuf,
}

impl FileAppender {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl AppendSink for FileAppender {
    fn append_line(&mut self, line: &str) -> AssistResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        writeln!(file, "{}", line)?;
        debug!("Appended line to {}", self.path.display());
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Keeps lines in memory; clones share the same buffer
#[derive(Debug, Clone, Default)]
pub struct MemoryAppender {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryAppender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line written so far
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }
}

impl AppendSink for MemoryAppender {
    fn append_line(&mut self, line: &str) -> AssistResult<()> {
        self.lines.lock()?.push(line.to_string());
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
