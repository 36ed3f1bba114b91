//! Static screen rendering

use crate::conversation::ConversationLog;
use crate::phrases::{TemplateCategory, QUICK_PHRASES};
use std::io::{self, Write};

const BANNER_RULE: &str = "==============================================================";
const BOX_WIDTH: usize = 50;

pub fn welcome(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{}", BANNER_RULE)?;
    for line in [
        "            SPEECH DISABILITY ASSISTANT",
        "",
        "    Helping people with speech challenges communicate",
        "",
        "  Features:",
        "  * Speech-to-Text Conversion",
        "  * Text-to-Speech Playback",
        "  * Communication Templates",
        "  * Conversation History",
    ] {
        writeln!(out, "{:<width$}", line, width = BANNER_RULE.len())?;
    }
    writeln!(out, "{}", BANNER_RULE)?;
    write!(out, "\nPress Enter to continue...")?;
    out.flush()
}

pub fn main_menu(out: &mut dyn Write) -> io::Result<()> {
    let rule = "=".repeat(50);
    writeln!(out, "\n{}", rule)?;
    writeln!(out, "           MAIN MENU")?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "1. [MIC] Speech-to-Text Converter")?;
    writeln!(out, "2. [SPEAKER] Text-to-Speech Player")?;
    writeln!(out, "3. [CHAT] Quick Communication Templates")?;
    writeln!(out, "4. [NOTES] View Conversation History")?;
    writeln!(out, "5. [DELETE] Clear All Data")?;
    writeln!(out, "6. [HELP] Help & Instructions")?;
    writeln!(out, "7. [EXIT] Exit Application")?;
    writeln!(out, "{}", rule)?;
    write!(out, "Choose an option (1-7): ")?;
    out.flush()
}

/// Section title followed by a dashed rule
pub fn header(out: &mut dyn Write, title: &str, rule_len: usize) -> io::Result<()> {
    writeln!(out, "\n{}", title)?;
    writeln!(out, "{}", "-".repeat(rule_len))
}

/// Three-option submenu shared by both speech directions
pub fn submenu(out: &mut dyn Write, first: &str, second: &str) -> io::Result<()> {
    writeln!(out, "\nOptions:")?;
    writeln!(out, "1. {}", first)?;
    writeln!(out, "2. {}", second)?;
    writeln!(out, "3. Return to main menu")?;
    write!(out, "Choose: ")?;
    out.flush()
}

pub fn converted_text(out: &mut dyn Write, text: &str) -> io::Result<()> {
    let rule = "-".repeat(BOX_WIDTH);
    writeln!(out, "\n[CHECK] CONVERTED TEXT:")?;
    writeln!(out, "+{}+", rule)?;
    writeln!(out, "| {:<width$} |", text, width = BOX_WIDTH - 2)?;
    writeln!(out, "+{}+", rule)
}

pub fn pronunciation_tips(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "\n[LIGHTBULB] Pronunciation Tips:")?;
    writeln!(out, "* Speak slowly and clearly")?;
    writeln!(out, "* Take breaks between words if needed")?;
    writeln!(out, "* Practice difficult sounds repeatedly")?;
    writeln!(out, "* Use breathing exercises before speaking")
}

pub fn quick_phrases(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "\n[MOBILE] Quick Phrases:")?;
    for (i, phrase) in QUICK_PHRASES.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, phrase)?;
    }
    write!(
        out,
        "\nSelect a phrase (1-{}) or 0 to return: ",
        QUICK_PHRASES.len()
    )?;
    out.flush()
}

pub fn templates(out: &mut dyn Write, categories: &[TemplateCategory]) -> io::Result<()> {
    for (i, category) in categories.iter().enumerate() {
        writeln!(out, "\n{}. {}:", i + 1, category.name)?;
        for phrase in category.phrases {
            writeln!(out, "   * {}", phrase)?;
        }
    }
    write!(
        out,
        "\nSelect category (1-{}) or 0 to return: ",
        categories.len()
    )?;
    out.flush()
}

pub fn history(out: &mut dyn Write, log: &ConversationLog) -> io::Result<()> {
    if log.is_empty() {
        return writeln!(out, "No conversation history available.");
    }
    for (number, entry) in log.list() {
        writeln!(out, "{}. {}", number, entry)?;
    }
    Ok(())
}

pub fn help(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "\n[HELP] HELP & INSTRUCTIONS")?;
    writeln!(out, "{}", "=".repeat(50))?;
    writeln!(
        out,
        "This application is designed for people with speech disabilities including:"
    )?;
    writeln!(out, "* Dysarthria (unclear speech due to muscle weakness)")?;
    writeln!(out, "* Apraxia (difficulty coordinating speech movements)")?;
    writeln!(out, "* Stuttering and other fluency disorders")?;
    writeln!(out, "* Voice disorders")?;
    writeln!(out, "* Post-stroke communication difficulties")?;
    writeln!(out, "\nFeatures explained:")?;
    writeln!(out, "1. Speech-to-Text: Converts unclear speech to readable text")?;
    writeln!(out, "2. Text-to-Speech: Speaks written text aloud")?;
    writeln!(out, "3. Templates: Quick access to common phrases")?;
    writeln!(out, "4. History: Track and review conversations")?;
    writeln!(out, "\nFor real implementation, this would integrate with:")?;
    writeln!(out, "* Google Cloud Speech-to-Text API")?;
    writeln!(out, "* Microsoft Azure Cognitive Services")?;
    writeln!(out, "* CMU Sphinx for offline processing")?;
    writeln!(out, "* Native OS text-to-speech engines")
}

pub fn farewell(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "\n[WAVE] Thank you for using Speech Disability Assistant!")?;
    writeln!(out, "Remember: Your voice matters, and technology is here to help.")?;
    writeln!(out, "Stay strong and keep communicating! [MUSCLE]")?;
    out.flush()
}

pub fn press_enter(out: &mut dyn Write) -> io::Result<()> {
    write!(out, "\nPress Enter to continue...")?;
    out.flush()
}
