//! Phrase Catalogs
//!
//! Static quick phrases and categorized communication templates.

/// A named group of template phrases
#[derive(Debug, Clone, Copy)]
pub struct TemplateCategory {
    pub name: &'static str,
    pub phrases: &'static [&'static str],
}

impl TemplateCategory {
    /// Phrase by 1-based index
    pub fn phrase(&self, index: usize) -> Option<&'static str> {
        index
            .checked_sub(1)
            .and_then(|i| self.phrases.get(i))
            .copied()
    }
}

pub const QUICK_PHRASES: [&str; 10] = [
    "Hello, how are you?",
    "Thank you very much.",
    "Please help me.",
    "I need assistance.",
    "Can you repeat that?",
    "I understand.",
    "I don't understand.",
    "Excuse me.",
    "I'm sorry.",
    "Have a good day.",
];

pub static TEMPLATES: [TemplateCategory; 4] = [
    TemplateCategory {
        name: "Medical",
        phrases: &[
            "I need medical help.",
            "I'm in pain.",
            "Call a doctor.",
            "Emergency!",
        ],
    },
    TemplateCategory {
        name: "Daily Needs",
        phrases: &[
            "I'm hungry.",
            "I'm thirsty.",
            "I need to rest.",
            "Bathroom please.",
        ],
    },
    TemplateCategory {
        name: "Social",
        phrases: &[
            "Good morning!",
            "How are you?",
            "Nice to meet you.",
            "See you later.",
        ],
    },
    TemplateCategory {
        name: "Work/School",
        phrases: &[
            "I have a question.",
            "I need help.",
            "Thank you.",
            "I understand.",
        ],
    },
];

/// Quick phrase by 1-based index
pub fn quick_phrase(index: usize) -> Option<&'static str> {
    index
        .checked_sub(1)
        .and_then(|i| QUICK_PHRASES.get(i))
        .copied()
}

/// Template category by 1-based index
pub fn template_category(index: usize) -> Option<&'static TemplateCategory> {
    index.checked_sub(1).and_then(|i| TEMPLATES.get(i))
}

/// Two-stage template lookup, both indices 1-based
pub fn template_phrase(category: usize, phrase: usize) -> Option<&'static str> {
    template_category(category).and_then(|c| c.phrase(phrase))
}
