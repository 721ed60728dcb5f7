//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a simple framebuffer that can be flushed to a terminal
//! backend, and owns the raw-mode/alternate-screen lifecycle.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep drawing pure ([`GameView`]) and I/O thin ([`TerminalRenderer`])
//! - Guarantee the terminal is restored on every exit path ([`TerminalSession`])

pub mod display;
pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod session;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use display::TerminalDisplay;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Glyphs, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use session::{install_panic_hook, restore_terminal, TerminalSession};
