//! Simulated speech recognition

use super::Pacer;
use crate::error::AssistResult;
use std::io::Write;
use std::time::Duration;
use tracing::debug;

/// Trait for recognition front-ends.
///
/// `listen` only gives "processing" feedback; the operator then types what
/// they would have said.
pub trait Recognizer: std::fmt::Debug {
    fn listen(&mut self, out: &mut dyn Write) -> AssistResult<()>;

    /// Get the engine name
    fn name(&self) -> &str;
}

#[derive(Debug)]
pub struct SimulatedRecognizer {
    pacer: Box<dyn Pacer>,
    ticks: u32,
    tick: Duration,
}

impl SimulatedRecognizer {
    pub fn new(pacer: Box<dyn Pacer>, ticks: u32, tick: Duration) -> Self {
        Self { pacer, ticks, tick }
    }
}

impl Recognizer for SimulatedRecognizer {
    fn listen(&mut self, out: &mut dyn Write) -> AssistResult<()> {
        debug!("Simulated recognition: {} ticks of {:?}", self.ticks, self.tick);
        writeln!(out, "\n[REC] Recording... (Simulation)")?;
        writeln!(out, "In a real implementation, this would:")?;
        writeln!(out, "* Capture audio from microphone")?;
        writeln!(out, "* Process speech using AI recognition")?;
        writeln!(out, "* Handle unclear speech patterns")?;
        writeln!(out, "* Correct common speech errors")?;

        write!(out, "Processing speech")?;
        out.flush()?;
        for _ in 0..self.ticks {
            self.pacer.pause(self.tick);
            write!(out, ".")?;
            out.flush()?;
        }
        writeln!(out)?;
        Ok(())
    }

    fn name(&self) -> &str {
        "simulated"
    }
}
