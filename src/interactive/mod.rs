//! Interactive TUI interface
//!
//! Full-screen game built on ratatui and crossterm.

pub mod app;
mod rendering;

pub use app::{App, InputMode, run_tui};
