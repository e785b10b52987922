//! Terminal window: header, summarize button, result label, progress gauge.

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod summarization;
pub mod terminal_guard;
pub mod theme;
