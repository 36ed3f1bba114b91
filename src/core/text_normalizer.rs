//! Text Normalization
//!
//! Cleans up recognized text before it is shown, saved or logged.

/// Trim, collapse internal whitespace runs to one space and capitalize the
/// first character.
pub fn normalize(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");

    let mut chars = collapsed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// True when the input holds nothing but whitespace
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
