//! Fixed-cadence session loop.
//!
//! One tick is: poll input (non-blocking) → apply → advance → render → pace.
//! When the session ends the loop shows the game-over text and blocks until
//! the player quits, then hands the outcome back for teardown.

use std::time::Duration;

use anyhow::Result;

use crate::core::{GameState, StepEvent};
use crate::types::{GameOutcome, Position, GAME_OVER_TEXT, TICK_MS};
use crate::{Display, InputSource, Pacer};

/// Drives a [`GameState`] until it reaches a terminal outcome.
#[derive(Debug, Clone, Copy)]
pub struct GameLoop {
    tick: Duration,
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new(Duration::from_millis(TICK_MS))
    }
}

impl GameLoop {
    pub fn new(tick: Duration) -> Self {
        Self { tick }
    }

    pub fn tick(&self) -> Duration {
        self.tick
    }

    /// Play one session to completion.
    pub fn run<D, I, P>(
        &self,
        state: &mut GameState,
        display: &mut D,
        input: &mut I,
        pacer: &mut P,
    ) -> Result<GameOutcome>
    where
        D: Display + ?Sized,
        I: InputSource + ?Sized,
        P: Pacer + ?Sized,
    {
        tracing::info!(
            seed = state.seed(),
            width = state.width(),
            height = state.height(),
            "session started"
        );

        display.render_frame(state)?;

        let outcome = loop {
            let intent = input.poll()?;
            if let Some(intent) = intent {
                tracing::trace!(intent = intent.as_str(), "input");
            }
            state.apply_input(intent);

            match state.advance() {
                StepEvent::Collided => {
                    tracing::debug!(head_x = state.head().x, head_y = state.head().y, "self collision")
                }
                StepEvent::BoardFilled => tracing::debug!(len = state.len(), "no free cell left"),
                StepEvent::Idle | StepEvent::Moved | StepEvent::Ate => {}
            }

            display.render_frame(state)?;

            if let Some(outcome) = state.outcome() {
                break outcome;
            }
            pacer.pace(self.tick);
        };

        tracing::info!(
            outcome = outcome.as_str(),
            score = state.score(),
            len = state.len(),
            "game over"
        );

        display.render_game_over(GAME_OVER_TEXT, game_over_anchor(state, GAME_OVER_TEXT))?;
        input.wait_for_quit()?;

        Ok(outcome)
    }
}

/// Where the game-over text starts: middle row, centred across the grid.
///
/// Text wider than the grid starts at column 0.
pub fn game_over_anchor(state: &GameState, text: &str) -> Position {
    let text_w = text.chars().count() as u16;
    let x = state.width().saturating_sub(text_w) / 2;
    let y = state.height() / 2;
    Position::new(x as i16, y as i16)
}
