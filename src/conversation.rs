//! Conversation Log
//!
//! In-memory ordered history of the current session, mirrored line by line
//! into an append-only log. Also hosts the saved-text archive, the second
//! append-only record written on user request.

use crate::audit::AppendSink;
use crate::error::{AssistError, AssistResult};
use chrono::{Local, NaiveDateTime, Timelike};
use std::fmt;
use tracing::{debug, info, warn};

/// Token that confirms a destructive clear
pub const CLEAR_CONFIRMATION: &str = "yes";

/// Kind of interaction that produced an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionKind {
    SpeechToText,
    Practice,
    TextToSpeech,
    QuickPhrase,
    Template,
}

impl InteractionKind {
    pub fn label(self) -> &'static str {
        match self {
            InteractionKind::SpeechToText => "Speech-to-Text",
            InteractionKind::Practice => "Practice",
            InteractionKind::TextToSpeech => "Text-to-Speech",
            InteractionKind::QuickPhrase => "Quick Phrase",
            InteractionKind::Template => "Template",
        }
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One logged interaction. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationEntry {
    timestamp: NaiveDateTime,
    kind: InteractionKind,
    input: String,
    output: String,
}

impl ConversationEntry {
    /// Build an entry, rejecting blank input or output
    pub fn new(
        timestamp: NaiveDateTime,
        kind: InteractionKind,
        input: impl Into<String>,
        output: impl Into<String>,
    ) -> AssistResult<Self> {
        let input = input.into();
        let output = output.into();
        if input.trim().is_empty() || output.trim().is_empty() {
            return Err(AssistError::EmptyInteraction(kind.to_string()));
        }
        Ok(Self {
            timestamp,
            kind,
            input,
            output,
        })
    }

    pub fn kind(&self) -> InteractionKind {
        self.kind
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output(&self) -> &str {
        &self.output
    }
}

/// Renders as `[MM-DD HH:mm] <type>: <input> -> <output>`
impl fmt::Display for ConversationEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {} -> {}",
            self.timestamp.format("%m-%d %H:%M"),
            self.kind,
            self.input,
            self.output
        )
    }
}

/// Outcome of a clear request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    Cleared(usize),
    Cancelled,
}

/// Session history plus its on-disk mirror
#[derive(Debug)]
pub struct ConversationLog {
    entries: Vec<ConversationEntry>,
    sink: Box<dyn AppendSink>,
}

impl ConversationLog {
    pub fn new(sink: Box<dyn AppendSink>) -> Self {
        Self {
            entries: Vec::new(),
            sink,
        }
    }

    /// Record an interaction stamped with the current local time.
    ///
    /// The in-memory entry is kept even when the mirror write fails; the
    /// write error is returned so the caller can report it.
    pub fn record(
        &mut self,
        kind: InteractionKind,
        input: &str,
        output: &str,
    ) -> AssistResult<()> {
        let entry = ConversationEntry::new(Local::now().naive_local(), kind, input, output)?;
        self.record_entry(entry)
    }

    /// Record a prebuilt entry
    pub fn record_entry(&mut self, entry: ConversationEntry) -> AssistResult<()> {
        let line = entry.to_string();
        info!("📝 Logged {} interaction", entry.kind());
        self.entries.push(entry);

        if let Err(e) = self.sink.append_line(&line) {
            warn!("❌ Could not mirror entry to {}: {}", self.sink.describe(), e);
            return Err(e);
        }
        Ok(())
    }

    /// Entries in insertion order, paired with their 1-based display number
    pub fn list(&self) -> impl Iterator<Item = (usize, &ConversationEntry)> {
        self.entries.iter().enumerate().map(|(i, e)| (i + 1, e))
    }

    pub fn entries(&self) -> &[ConversationEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Empty the in-memory history when `confirmation` is "yes" (case and
    /// surrounding whitespace ignored). The on-disk mirror is left intact.
    pub fn clear(&mut self, confirmation: &str) -> ClearOutcome {
        if confirmation.trim().to_lowercase() != CLEAR_CONFIRMATION {
            debug!("Clear cancelled by '{}'", confirmation.trim());
            return ClearOutcome::Cancelled;
        }
        let count = self.entries.len();
        self.entries.clear();
        info!("🗑️ Cleared {} conversation entries", count);
        ClearOutcome::Cleared(count)
    }
}

/// Appends user-approved text as `[<full local timestamp>] <text>`
#[derive(Debug)]
pub struct TextArchive {
    sink: Box<dyn AppendSink>,
}

impl TextArchive {
    pub fn new(sink: Box<dyn AppendSink>) -> Self {
        Self { sink }
    }

    pub fn save(&mut self, text: &str) -> AssistResult<()> {
        self.save_at(Local::now().naive_local(), text)
    }

    pub fn save_at(&mut self, timestamp: NaiveDateTime, text: &str) -> AssistResult<()> {
        let line = format!("[{}] {}", iso_local(timestamp), text);
        self.sink.append_line(&line)?;
        info!("💾 Saved text to {}", self.sink.describe());
        Ok(())
    }

    pub fn location(&self) -> String {
        self.sink.describe()
    }
}

/// ISO-8601 local time; seconds only when non-zero, fraction in 3, 6 or 9
/// digits only when present
fn iso_local(timestamp: NaiveDateTime) -> String {
    if timestamp.second() == 0 && timestamp.nanosecond() == 0 {
        timestamp.format("%Y-%m-%dT%H:%M").to_string()
    } else {
        timestamp.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::MemoryAppender;
    use chrono::NaiveDate;

    #[derive(Debug)]
    struct BrokenSink;

    impl AppendSink for BrokenSink {
        fn append_line(&mut self, _line: &str) -> AssistResult<()> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only").into())
        }

        fn describe(&self) -> String {
            "broken".to_string()
        }
    }

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(h, m, 42)
            .unwrap()
    }

    #[test]
    fn test_entry_renders_minute_precision() {
        let entry =
            ConversationEntry::new(at(9, 5), InteractionKind::SpeechToText, "hi", "Hi").unwrap();
        assert_eq!(entry.to_string(), "[03-07 09:05] Speech-to-Text: hi -> Hi");
    }

    #[test]
    fn test_entry_rejects_blank_text() {
        let err = ConversationEntry::new(at(1, 1), InteractionKind::Practice, "  ", "x");
        assert!(matches!(err, Err(AssistError::EmptyInteraction(_))));
        let err = ConversationEntry::new(at(1, 1), InteractionKind::Practice, "x", "");
        assert!(matches!(err, Err(AssistError::EmptyInteraction(_))));
    }

    #[test]
    fn test_record_appends_and_mirrors() {
        let sink = MemoryAppender::new();
        let mut log = ConversationLog::new(Box::new(sink.clone()));

        log.record(InteractionKind::SpeechToText, "hi", "Hi").unwrap();

        assert_eq!(log.len(), 1);
        let (number, entry) = log.list().next().unwrap();
        assert_eq!(number, 1);
        assert!(entry.to_string().ends_with("Speech-to-Text: hi -> Hi"));
        assert_eq!(sink.lines(), vec![entry.to_string()]);
    }

    #[test]
    fn test_blank_record_leaves_history_alone() {
        let sink = MemoryAppender::new();
        let mut log = ConversationLog::new(Box::new(sink.clone()));
        assert!(log.record(InteractionKind::TextToSpeech, "   ", "Spoken aloud").is_err());
        assert!(log.is_empty());
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn test_record_keeps_entry_when_mirror_fails() {
        let mut log = ConversationLog::new(Box::new(BrokenSink));
        let result = log.record(InteractionKind::QuickPhrase, "Excuse me.", "Spoken aloud");
        assert!(matches!(result, Err(AssistError::Io(_))));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let mut log = ConversationLog::new(Box::new(MemoryAppender::new()));
        log.record(InteractionKind::Template, "Emergency!", "Spoken aloud")
            .unwrap();
        log.record(InteractionKind::Practice, "ok", "Ok").unwrap();

        let numbered: Vec<_> = log.list().map(|(n, e)| (n, e.kind())).collect();
        assert_eq!(
            numbered,
            vec![(1, InteractionKind::Template), (2, InteractionKind::Practice)]
        );
    }

    #[test]
    fn test_clear_requires_yes() {
        let sink = MemoryAppender::new();
        let mut log = ConversationLog::new(Box::new(sink.clone()));
        log.record(InteractionKind::SpeechToText, "hi", "Hi").unwrap();

        assert_eq!(log.clear("no"), ClearOutcome::Cancelled);
        assert_eq!(log.clear("y"), ClearOutcome::Cancelled);
        assert_eq!(log.len(), 1);

        assert_eq!(log.clear(" YES "), ClearOutcome::Cleared(1));
        assert!(log.is_empty());
        assert_eq!(log.list().count(), 0);
        // Mirror is untouched
        assert_eq!(sink.lines().len(), 1);
    }

    #[test]
    fn test_archive_line_format() {
        let sink = MemoryAppender::new();
        let mut archive = TextArchive::new(Box::new(sink.clone()));
        archive.save_at(at(14, 30), "Hello world").unwrap();
        assert_eq!(sink.lines(), vec!["[2024-03-07T14:30:42] Hello world".to_string()]);
    }

    #[test]
    fn test_archive_timestamp_precision() {
        let base = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        let on_minute = base.and_hms_opt(14, 30, 0).unwrap();
        let with_millis = base.and_hms_milli_opt(14, 30, 5, 120).unwrap();
        let with_nanos = base.and_hms_nano_opt(14, 30, 5, 123_456_789).unwrap();

        assert_eq!(iso_local(on_minute), "2024-03-07T14:30");
        assert_eq!(iso_local(with_millis), "2024-03-07T14:30:05.120");
        assert_eq!(iso_local(with_nanos), "2024-03-07T14:30:05.123456789");
    }

    #[test]
    fn test_archive_reports_failure() {
        let mut archive = TextArchive::new(Box::new(BrokenSink));
        assert!(archive.save("text").is_err());
    }
}
