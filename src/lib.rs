//! Intake - a terminal form for adding job candidates
//!
//! The domain core (`candidate`, `form`, `submit`) is pure and render-free;
//! the TUI shell (`app`, `input`, `ui`) drives it. The binary entry point
//! is in main.rs.

pub mod app;
pub mod candidate;
pub mod config;
pub mod form;
pub mod input;
pub mod submit;
pub mod theme;
pub mod ui;
