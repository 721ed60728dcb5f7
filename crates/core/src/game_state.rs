//! Game state module - manages the complete game state
//!
//! This module ties together the grid, the snake body, the fruit sampler and the
//! score. It handles turning, stepping, growth, self-collision, fruit placement
//! and the session lifecycle.

use std::collections::VecDeque;
use std::fmt;

use crate::grid::Grid;
use crate::rng::FruitSampler;
use crate::types::*;

/// What a single [`GameState::advance`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    /// The game was already over; nothing changed.
    Idle,
    /// The snake moved one cell without eating.
    Moved,
    /// The snake ate the fruit and grew by one segment.
    Ate,
    /// The new head hit the body; the body was left as it was.
    Collided,
    /// The snake ate the last fruit the interior could hold.
    BoardFilled,
}

/// Rejected [`GameState::from_layout`] input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    EmptyBody,
    OutOfBounds(Position),
    FruitOnBody(Position),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::EmptyBody => write!(f, "snake body must have at least one segment"),
            LayoutError::OutOfBounds(p) => write!(f, "position ({}, {}) is outside the grid", p.x, p.y),
            LayoutError::FruitOnBody(p) => {
                write!(f, "fruit at ({}, {}) overlaps the snake body", p.x, p.y)
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    /// Head at the front, tail at the back.
    body: VecDeque<Position>,
    direction: Direction,
    fruit: Position,
    score: u32,
    /// `Some` once the session is over. Never cleared except by `reset`.
    outcome: Option<GameOutcome>,
    sampler: FruitSampler,
}

impl GameState {
    /// Create a new game on a `width x height` grid with the given RNG seed
    pub fn new(width: u16, height: u16, seed: u64) -> Self {
        let grid = Grid::new(width, height);
        let mut state = Self {
            grid,
            body: VecDeque::with_capacity(grid.interior_cells()),
            direction: Direction::Down,
            fruit: grid.center(),
            score: 0,
            outcome: None,
            sampler: FruitSampler::new(seed),
        };
        state.reset();
        state
    }

    /// Create a game in an arbitrary in-progress layout.
    ///
    /// `body` is head-first. Every position must lie on the grid and the fruit
    /// must not overlap the body. Score starts at zero.
    pub fn from_layout(
        width: u16,
        height: u16,
        seed: u64,
        body: &[Position],
        direction: Direction,
        fruit: Position,
    ) -> Result<Self, LayoutError> {
        let grid = Grid::new(width, height);
        if body.is_empty() {
            return Err(LayoutError::EmptyBody);
        }
        if let Some(&p) = body.iter().chain(std::iter::once(&fruit)).find(|&&p| !grid.contains(p)) {
            return Err(LayoutError::OutOfBounds(p));
        }
        if body.contains(&fruit) {
            return Err(LayoutError::FruitOnBody(fruit));
        }

        Ok(Self {
            grid,
            body: body.iter().copied().collect(),
            direction,
            fruit,
            score: 0,
            outcome: None,
            sampler: FruitSampler::new(seed),
        })
    }

    /// Start a fresh session: one segment at the grid center heading down.
    pub fn reset(&mut self) {
        self.direction = Direction::Down;
        self.score = 0;
        self.outcome = None;
        self.body.clear();
        self.body.push_front(self.grid.center());
        match self.sample_fruit() {
            Some(p) => self.fruit = p,
            None => {
                self.fruit = self.grid.center();
                self.finish(GameOutcome::BoardFilled);
            }
        }
    }

    pub fn width(&self) -> u16 {
        self.grid.width()
    }

    pub fn height(&self) -> u16 {
        self.grid.height()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn interior_cells(&self) -> usize {
        self.grid.interior_cells()
    }

    /// Body segments, head first.
    pub fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn fruit(&self) -> Position {
        self.fruit
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn game_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn seed(&self) -> u64 {
        self.sampler.seed()
    }

    /// Apply one polled input. `None` (nothing pressed) is a no-op.
    pub fn apply_input(&mut self, intent: Option<Intent>) {
        if self.game_over() {
            return;
        }
        match intent {
            Some(Intent::Quit) => self.finish(GameOutcome::Quit),
            Some(Intent::Turn(dir)) => {
                self.turn(dir);
            }
            None => {}
        }
    }

    /// Change heading unless `dir` would reverse the snake onto itself.
    ///
    /// Returns whether the direction changed.
    pub fn turn(&mut self, dir: Direction) -> bool {
        if self.game_over() || self.direction.is_opposite(dir) {
            tracing::trace!(from = self.direction.as_str(), to = dir.as_str(), "turn rejected");
            return false;
        }
        self.direction = dir;
        true
    }

    /// Run one simulation step.
    pub fn advance(&mut self) -> StepEvent {
        if self.game_over() {
            return StepEvent::Idle;
        }

        let next = self.grid.wrap(self.head().step(self.direction));

        // The head's own cell is vacated by the move; everything behind it,
        // tail included, still blocks.
        if self.body.iter().skip(1).any(|&seg| seg == next) {
            self.finish(GameOutcome::Collided);
            return StepEvent::Collided;
        }

        let ate = next == self.fruit;
        self.body.push_front(next);
        if !ate {
            self.body.pop_back();
            return StepEvent::Moved;
        }

        // Keeping the tail is the growth: +1 segment on this very tick.
        self.score += 1;
        tracing::debug!(score = self.score, len = self.body.len(), "fruit eaten");

        match self.sample_fruit() {
            Some(p) => {
                self.fruit = p;
                StepEvent::Ate
            }
            None => {
                self.finish(GameOutcome::BoardFilled);
                StepEvent::BoardFilled
            }
        }
    }

    fn sample_fruit(&mut self) -> Option<Position> {
        let body = &self.body;
        self.sampler.sample_free(&self.grid, |p| body.contains(&p))
    }

    fn finish(&mut self, outcome: GameOutcome) {
        if self.outcome.is_none() {
            self.outcome = Some(outcome);
        }
    }
}
