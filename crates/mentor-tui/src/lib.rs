//! mentor-tui - Terminal UI for Code Mentor
//!
//! This crate provides the ratatui-based terminal interface: event polling,
//! rendering, and the async runtime that executes the update loop's actions
//! (simulated timers, provider calls, clipboard writes).

pub mod actions;
pub mod clipboard;
pub mod event;
pub mod layout;
pub mod process;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::run;
