pub mod clipboard;
pub mod config;
pub mod logging;
pub mod model;
pub mod summarize;
pub mod ui;
