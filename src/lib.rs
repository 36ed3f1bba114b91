//! Speech Assistant Library
//!
//! Core modules for the text-menu speech assistance tool.

pub mod audit;
pub mod config;
pub mod conversation;
pub mod core;
pub mod error;
pub mod phrases;
pub mod selection;
pub mod shell;
pub mod speech;
