//! Simulated Speech Engine
//!
//! No audio is captured or produced. Both directions print a dotted progress
//! indicator paced by an injectable [`Pacer`], so tests run without delay.

pub mod asr;
pub mod tts;

use crate::config::Config;
use std::time::Duration;
use tracing::info;

pub use asr::{Recognizer, SimulatedRecognizer};
pub use tts::{SimulatedSynthesizer, Synthesizer};

/// Source of the artificial "processing" delay between progress ticks
pub trait Pacer: std::fmt::Debug {
    fn pause(&mut self, duration: Duration);
}

/// Blocks the calling thread for each tick
#[derive(Debug, Default, Clone, Copy)]
pub struct SleepPacer;

impl Pacer for SleepPacer {
    fn pause(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Returns immediately
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDelay;

impl Pacer for NoDelay {
    fn pause(&mut self, _duration: Duration) {}
}

fn pacer(no_delay: bool) -> Box<dyn Pacer> {
    if no_delay {
        Box::new(NoDelay)
    } else {
        Box::new(SleepPacer)
    }
}

/// Factory for the configured recognizer/synthesizer pair
pub fn create_engines(
    config: &Config,
    no_delay: bool,
) -> (Box<dyn Recognizer>, Box<dyn Synthesizer>) {
    info!(
        "🛠️ Creating simulated speech engines (delay: {})",
        if no_delay { "off" } else { "on" }
    );
    let recognizer = SimulatedRecognizer::new(
        pacer(no_delay),
        config.recognition_ticks,
        config.recognition_tick(),
    );
    let synthesizer = SimulatedSynthesizer::new(
        pacer(no_delay),
        config.chars_per_speech_tick,
        config.speech_tick(),
    );
    info!(
        "✅ Speech engines '{}' / '{}' initialized",
        recognizer.name(),
        synthesizer.name()
    );
    (Box::new(recognizer), Box::new(synthesizer))
}
