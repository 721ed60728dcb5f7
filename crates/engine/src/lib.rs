//! Session driver and the capability seams it talks to.
//!
//! The engine owns no terminal code. It drives a [`GameState`](crate::core::GameState)
//! through a [`Display`], an [`InputSource`] and a [`Pacer`], so the whole loop
//! can run headless in tests with scripted inputs.

pub mod game_loop;
pub mod pacer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use game_loop::{game_over_anchor, GameLoop};
pub use pacer::{Pacer, TickPacer};

use anyhow::Result;

use crate::core::GameState;
use crate::types::{Intent, Position};

/// Something that can show the game.
pub trait Display {
    /// Draw border, fruit, body (head first) and score, then flush.
    fn render_frame(&mut self, state: &GameState) -> Result<()>;

    /// Overlay `text` starting at grid cell `at`, then flush.
    fn render_game_over(&mut self, text: &str, at: Position) -> Result<()>;
}

/// Something that produces player intents.
pub trait InputSource {
    /// Return immediately with the next pending intent, if any.
    fn poll(&mut self) -> Result<Option<Intent>>;

    /// Block until a quit intent arrives, discarding everything else.
    fn wait_for_quit(&mut self) -> Result<()>;
}
