//! Selection Handler
//!
//! Turns a typed menu token into a 1-based choice. Shared by the quick phrase
//! list and the two-stage template picker.

use tracing::debug;

/// Result of reading a numeric selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// A valid 1-based index within the list
    Chosen(usize),
    /// Zero or out of range, returns to the caller without action
    Cancelled,
    /// Not a number at all
    Invalid,
}

impl Selection {
    /// Parse `input` against a list of `len` items
    pub fn parse(input: &str, len: usize) -> Self {
        let text = input.trim();

        let Ok(n) = text.parse::<i64>() else {
            debug!("Selection: '{}' is not a number", text);
            return Selection::Invalid;
        };

        match usize::try_from(n) {
            Ok(idx) if (1..=len).contains(&idx) => Selection::Chosen(idx),
            _ => {
                debug!("Selection: {} outside 1..={}, cancelled", n, len);
                Selection::Cancelled
            }
        }
    }
}
