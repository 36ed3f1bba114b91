//! Simulated speech synthesis

use super::Pacer;
use crate::error::AssistResult;
use std::io::Write;
use std::time::Duration;
use tracing::debug;

/// Trait for synthesis back-ends
pub trait Synthesizer: std::fmt::Debug {
    /// "Speak" the given text
    fn speak(&mut self, text: &str, out: &mut dyn Write) -> AssistResult<()>;

    /// Get the engine name
    fn name(&self) -> &str;
}

/// Frames the text as spoken output; one progress tick per
/// `chars_per_tick` characters.
#[derive(Debug)]
pub struct SimulatedSynthesizer {
    pacer: Box<dyn Pacer>,
    chars_per_tick: usize,
    tick: Duration,
}

impl SimulatedSynthesizer {
    pub fn new(pacer: Box<dyn Pacer>, chars_per_tick: usize, tick: Duration) -> Self {
        Self {
            pacer,
            chars_per_tick,
            tick,
        }
    }

    /// Number of progress ticks for `text`
    pub fn ticks_for(&self, text: &str) -> usize {
        text.chars()
            .count()
            .checked_div(self.chars_per_tick)
            .unwrap_or(0)
    }
}

impl Synthesizer for SimulatedSynthesizer {
    fn speak(&mut self, text: &str, out: &mut dyn Write) -> AssistResult<()> {
        let ticks = self.ticks_for(text);
        debug!("Simulated speaking {} chars in {} ticks", text.len(), ticks);

        writeln!(out, "\n[SPEAKER] Playing speech...")?;
        writeln!(out, "Text: \"{}\"", text)?;
        writeln!(out, "[In real implementation, this would use TTS engine]")?;

        write!(out, "Speaking")?;
        out.flush()?;
        for _ in 0..ticks {
            self.pacer.pause(self.tick);
            write!(out, ".")?;
            out.flush()?;
        }
        writeln!(out, "\n[CHECK] Speech playback complete!")?;
        Ok(())
    }

    fn name(&self) -> &str {
        "simulated"
    }
}
