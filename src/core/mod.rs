//! Core processing modules
//!
//! Contains the text normalization applied to recognized and practice speech.

pub mod text_normalizer;

pub use text_normalizer::{is_blank, normalize};
