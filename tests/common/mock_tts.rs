//! Mock synthesizer for testing
//!
//! Records all spoken text for verification.

use speech_assistant::error::AssistResult;
use speech_assistant::speech::Synthesizer;
use std::io::Write;
use std::sync::{Arc, Mutex};

/// Mock synthesizer that records spoken text
#[derive(Debug, Default)]
pub struct MockTts {
    pub spoken: Arc<Mutex<Vec<String>>>,
}

impl MockTts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the recorded phrases that survives moving the mock
    pub fn handle(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.spoken)
    }
}

impl Synthesizer for MockTts {
    fn speak(&mut self, text: &str, _out: &mut dyn Write) -> AssistResult<()> {
        self.spoken.lock().unwrap().push(text.to_string());
        Ok(())
    }

    fn name(&self) -> &str {
        "mock"
    }
}
