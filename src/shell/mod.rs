//! Menu/Dispatch Shell
//!
//! Reads one line at a time, maps it to a [`Screen`] and loops until Exit.
//! All session state lives in [`Session`], owned by the shell for the run and
//! handed back when it ends.

pub mod screens;

use crate::audit::FileAppender;
use crate::config::Config;
use crate::conversation::{ClearOutcome, ConversationLog, InteractionKind, TextArchive};
use crate::core::{is_blank, normalize};
use crate::error::{AssistError, AssistResult};
use crate::phrases::{quick_phrase, template_category, template_phrase, QUICK_PHRASES, TEMPLATES};
use crate::selection::Selection;
use crate::speech::{self, Recognizer, Synthesizer};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// Shell states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    MainMenu,
    SpeechToText,
    TextToSpeech,
    Templates,
    History,
    ClearConfirm,
    Help,
    Exit,
}

impl Screen {
    /// Main menu token -> feature screen
    pub fn from_menu_token(token: &str) -> Option<Self> {
        match token.trim() {
            "1" => Some(Screen::SpeechToText),
            "2" => Some(Screen::TextToSpeech),
            "3" => Some(Screen::Templates),
            "4" => Some(Screen::History),
            "5" => Some(Screen::ClearConfirm),
            "6" => Some(Screen::Help),
            "7" => Some(Screen::Exit),
            _ => None,
        }
    }
}

/// Everything a run mutates, built once at startup
#[derive(Debug)]
pub struct Session {
    pub log: ConversationLog,
    pub archive: TextArchive,
    pub recognizer: Box<dyn Recognizer>,
    pub synthesizer: Box<dyn Synthesizer>,
}

impl Session {
    pub fn new(
        log: ConversationLog,
        archive: TextArchive,
        recognizer: Box<dyn Recognizer>,
        synthesizer: Box<dyn Synthesizer>,
    ) -> Self {
        Self {
            log,
            archive,
            recognizer,
            synthesizer,
        }
    }

    /// File-backed session using the configured paths
    pub fn from_config(config: &Config, no_delay: bool) -> Self {
        let (recognizer, synthesizer) = speech::create_engines(config, no_delay);
        info!(
            "📂 Conversation log: {}, saved text: {}",
            config.conversation_log_path.display(),
            config.saved_text_path.display()
        );
        Self::new(
            ConversationLog::new(Box::new(FileAppender::new(&config.conversation_log_path))),
            TextArchive::new(Box::new(FileAppender::new(&config.saved_text_path))),
            recognizer,
            synthesizer,
        )
    }
}

/// Interactive loop over an input source and a console
pub struct Shell<R, W> {
    input: R,
    out: W,
    session: Session,
    screen: Screen,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, out: W, session: Session) -> Self {
        Self {
            input,
            out,
            session,
            screen: Screen::Welcome,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run until Exit, then release the input and return the session
    pub fn run(mut self) -> AssistResult<Session> {
        while self.screen != Screen::Exit {
            let next = self.step()?;
            if next != self.screen {
                debug!("Screen: {:?} -> {:?}", self.screen, next);
            }
            self.screen = next;
        }
        screens::farewell(&mut self.out)?;
        info!("👋 Session ended with {} entries", self.session.log.len());
        Ok(self.session)
    }

    /// Render the current screen, handle its input and return the next one
    pub fn step(&mut self) -> AssistResult<Screen> {
        match self.screen {
            Screen::Welcome => self.welcome(),
            Screen::MainMenu => self.main_menu(),
            Screen::SpeechToText => self.speech_to_text(),
            Screen::TextToSpeech => self.text_to_speech(),
            Screen::Templates => self.templates(),
            Screen::History => self.history(),
            Screen::ClearConfirm => self.clear_confirm(),
            Screen::Help => self.help(),
            Screen::Exit => Ok(Screen::Exit),
        }
    }

    /// Next input line without its terminator; `None` once input is exhausted
    fn read_line(&mut self) -> AssistResult<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            debug!("Input exhausted");
            return Ok(None);
        }
        // Undecodable bytes become U+FFFD rather than ending the session
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn prompt(&mut self, text: &str) -> AssistResult<Option<String>> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        self.read_line()
    }

    /// Wait for Enter, then go back to the main menu
    fn pause_then_menu(&mut self) -> AssistResult<Screen> {
        screens::press_enter(&mut self.out)?;
        Ok(match self.read_line()? {
            Some(_) => Screen::MainMenu,
            None => Screen::Exit,
        })
    }

    fn welcome(&mut self) -> AssistResult<Screen> {
        screens::welcome(&mut self.out)?;
        Ok(match self.read_line()? {
            Some(_) => Screen::MainMenu,
            None => Screen::Exit,
        })
    }

    fn main_menu(&mut self) -> AssistResult<Screen> {
        screens::main_menu(&mut self.out)?;
        let Some(choice) = self.read_line()? else {
            return Ok(Screen::Exit);
        };

        match Screen::from_menu_token(&choice) {
            Some(screen) => Ok(screen),
            None => {
                writeln!(self.out, "X Invalid option. Please try again.")?;
                Ok(Screen::MainMenu)
            }
        }
    }

    fn speech_to_text(&mut self) -> AssistResult<Screen> {
        screens::header(&mut self.out, "[MIC] SPEECH-TO-TEXT CONVERTER", 40)?;
        writeln!(
            self.out,
            "This feature helps convert unclear or difficult speech into clear text."
        )?;
        writeln!(
            self.out,
            "\n[SIMULATION MODE - Real version would capture audio]"
        )?;

        loop {
            screens::submenu(
                &mut self.out,
                "Start speech recognition",
                "Practice with text input (simulation)",
            )?;
            let Some(option) = self.read_line()? else {
                return Ok(Screen::Exit);
            };

            let finished = match option.trim() {
                "1" => self.recognize_speech()?,
                "2" => self.practice()?,
                "3" => return Ok(Screen::MainMenu),
                _ => {
                    writeln!(self.out, "Invalid option.")?;
                    true
                }
            };
            if !finished {
                return Ok(Screen::Exit);
            }
        }
    }

    /// Returns `false` when input ran out mid-interaction
    fn recognize_speech(&mut self) -> AssistResult<bool> {
        self.session.recognizer.listen(&mut self.out)?;

        let Some(spoken) = self.prompt("\nFor simulation, please type what you would say: ")?
        else {
            return Ok(false);
        };
        if is_blank(&spoken) {
            return Ok(true);
        }

        let processed = normalize(&spoken);
        if !self.show_converted(&processed)? {
            return Ok(false);
        }
        self.record(InteractionKind::SpeechToText, &spoken, &processed)?;
        Ok(true)
    }

    fn practice(&mut self) -> AssistResult<bool> {
        writeln!(self.out, "\n[PRACTICE] Practice Mode")?;
        writeln!(
            self.out,
            "Type sentences that might be difficult to pronounce:"
        )?;
        let Some(text) = self.prompt("Your text: ")? else {
            return Ok(false);
        };
        if is_blank(&text) {
            return Ok(true);
        }

        let processed = normalize(&text);
        if !self.show_converted(&processed)? {
            return Ok(false);
        }
        screens::pronunciation_tips(&mut self.out)?;
        self.record(InteractionKind::Practice, &text, &processed)?;
        Ok(true)
    }

    /// Box the text and offer to save it
    fn show_converted(&mut self, text: &str) -> AssistResult<bool> {
        screens::converted_text(&mut self.out, text)?;
        let Some(answer) = self.prompt("\nWould you like to save this text? (y/n): ")? else {
            return Ok(false);
        };

        if answer.trim().to_lowercase().starts_with('y') {
            match self.session.archive.save(text) {
                Ok(()) => writeln!(
                    self.out,
                    "[CHECK] Text saved to {}",
                    self.session.archive.location()
                )?,
                Err(e) => {
                    warn!("❌ Failed to save text: {}", e);
                    writeln!(self.out, "[X] Error saving text to file.")?;
                }
            }
        }
        Ok(true)
    }

    fn text_to_speech(&mut self) -> AssistResult<Screen> {
        screens::header(&mut self.out, "[SPEAKER] TEXT-TO-SPEECH PLAYER", 40)?;
        writeln!(
            self.out,
            "This feature helps people who cannot speak to communicate."
        )?;

        loop {
            screens::submenu(
                &mut self.out,
                "Type text to convert to speech",
                "Use quick phrases",
            )?;
            let Some(option) = self.read_line()? else {
                return Ok(Screen::Exit);
            };

            let finished = match option.trim() {
                "1" => self.custom_speech()?,
                "2" => self.quick_phrase_speech()?,
                "3" => return Ok(Screen::MainMenu),
                _ => {
                    writeln!(self.out, "Invalid option.")?;
                    true
                }
            };
            if !finished {
                return Ok(Screen::Exit);
            }
        }
    }

    fn custom_speech(&mut self) -> AssistResult<bool> {
        let Some(text) = self.prompt("\nEnter text to convert to speech: ")? else {
            return Ok(false);
        };
        if !is_blank(&text) {
            self.speak_and_record(InteractionKind::TextToSpeech, &text)?;
        }
        Ok(true)
    }

    fn quick_phrase_speech(&mut self) -> AssistResult<bool> {
        screens::quick_phrases(&mut self.out)?;
        let Some(choice) = self.read_line()? else {
            return Ok(false);
        };

        match Selection::parse(&choice, QUICK_PHRASES.len()) {
            Selection::Chosen(idx) => {
                if let Some(phrase) = quick_phrase(idx) {
                    self.speak_and_record(InteractionKind::QuickPhrase, phrase)?;
                }
            }
            Selection::Cancelled => {}
            Selection::Invalid => writeln!(self.out, "Invalid selection.")?,
        }
        Ok(true)
    }

    fn templates(&mut self) -> AssistResult<Screen> {
        screens::header(&mut self.out, "[CHAT] QUICK COMMUNICATION TEMPLATES", 45)?;
        screens::templates(&mut self.out, &TEMPLATES)?;
        let Some(choice) = self.read_line()? else {
            return Ok(Screen::Exit);
        };

        match Selection::parse(&choice, TEMPLATES.len()) {
            Selection::Chosen(idx) => {
                if let Some(category) = template_category(idx) {
                    let Some(choice) = self.prompt(&format!(
                        "Select phrase (1-{}): ",
                        category.phrases.len()
                    ))?
                    else {
                        return Ok(Screen::Exit);
                    };
                    match Selection::parse(&choice, category.phrases.len()) {
                        Selection::Chosen(phrase_idx) => {
                            if let Some(phrase) = template_phrase(idx, phrase_idx) {
                                self.speak_and_record(InteractionKind::Template, phrase)?;
                            }
                        }
                        Selection::Cancelled => {}
                        Selection::Invalid => writeln!(self.out, "Invalid selection.")?,
                    }
                }
            }
            Selection::Cancelled => {}
            Selection::Invalid => writeln!(self.out, "Invalid selection.")?,
        }

        self.pause_then_menu()
    }

    fn history(&mut self) -> AssistResult<Screen> {
        screens::header(&mut self.out, "[NOTES] CONVERSATION HISTORY", 40)?;
        screens::history(&mut self.out, &self.session.log)?;
        self.pause_then_menu()
    }

    fn clear_confirm(&mut self) -> AssistResult<Screen> {
        let Some(answer) = self.prompt("Are you sure you want to clear all data? (yes/no): ")?
        else {
            return Ok(Screen::Exit);
        };

        match self.session.log.clear(&answer) {
            ClearOutcome::Cleared(_) => writeln!(self.out, "[CHECK] All data cleared.")?,
            ClearOutcome::Cancelled => writeln!(self.out, "Operation cancelled.")?,
        }
        Ok(Screen::MainMenu)
    }

    fn help(&mut self) -> AssistResult<Screen> {
        screens::help(&mut self.out)?;
        self.pause_then_menu()
    }

    fn speak_and_record(&mut self, kind: InteractionKind, text: &str) -> AssistResult<()> {
        self.session.synthesizer.speak(text, &mut self.out)?;
        self.record(kind, text, "Spoken aloud")
    }

    /// Log an interaction; mirror failures are reported, never fatal
    fn record(&mut self, kind: InteractionKind, input: &str, output: &str) -> AssistResult<()> {
        match self.session.log.record(kind, input, output) {
            Ok(()) => {}
            Err(AssistError::EmptyInteraction(kind)) => {
                debug!("Skipped empty {} interaction", kind);
            }
            Err(e) => {
                debug!("Log mirror failed: {}", e);
                writeln!(self.out, "Error saving to log file.")?;
            }
        }
        Ok(())
    }
}
