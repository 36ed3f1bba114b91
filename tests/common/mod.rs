#![allow(dead_code)]

pub mod mock_tts;

use speech_assistant::audit::{AppendSink, MemoryAppender};
use speech_assistant::conversation::{ConversationLog, TextArchive};
use speech_assistant::error::AssistResult;
use speech_assistant::shell::{Session, Shell};
use speech_assistant::speech::{NoDelay, SimulatedRecognizer, SimulatedSynthesizer};
use std::io::Cursor;
use std::time::Duration;

/// In-memory session with zero-delay simulated engines
pub struct TestContext {
    pub log_lines: MemoryAppender,
    pub saved_lines: MemoryAppender,
    pub session: Session,
}

impl TestContext {
    pub fn new() -> Self {
        let log_lines = MemoryAppender::new();
        let saved_lines = MemoryAppender::new();
        let session = Session::new(
            ConversationLog::new(Box::new(log_lines.clone())),
            TextArchive::new(Box::new(saved_lines.clone())),
            Box::new(SimulatedRecognizer::new(
                Box::new(NoDelay),
                3,
                Duration::from_secs(1),
            )),
            Box::new(SimulatedSynthesizer::new(
                Box::new(NoDelay),
                10,
                Duration::from_millis(500),
            )),
        );
        Self {
            log_lines,
            saved_lines,
            session,
        }
    }

    /// Feed `lines` as stdin and run the shell to completion
    pub fn run(self, lines: &[&str]) -> (Session, String) {
        run_script(self.session, lines)
    }
}

pub fn run_script(session: Session, lines: &[&str]) -> (Session, String) {
    let mut script = lines.join("\n");
    script.push('\n');

    let mut out = Vec::new();
    let session = Shell::new(Cursor::new(script), &mut out, session)
        .run()
        .expect("Shell run failed");
    (session, String::from_utf8(out).expect("Console output not UTF-8"))
}

/// Sink whose every write fails, like a read-only log file
#[derive(Debug)]
pub struct BrokenSink;

impl AppendSink for BrokenSink {
    fn append_line(&mut self, _line: &str) -> AssistResult<()> {
        Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only").into())
    }

    fn describe(&self) -> String {
        "broken".to_string()
    }
}
