//! Terminal input module (engine-facing).
//!
//! This module maps `crossterm` key events into [`crate::types::Intent`] and
//! provides [`TerminalInput`], the crossterm-backed
//! [`InputSource`](tui_snake_engine::InputSource).

pub mod map;
pub mod terminal;

pub use tui_snake_types as types;

pub use map::{handle_key_event, should_quit};
pub use terminal::TerminalInput;
