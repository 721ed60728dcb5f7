//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! The playfield is a fixed 30x10 grid including a 1-cell border:
//!
//! - **Width**: 30 columns (indexed 0-29), interior columns 1-28
//! - **Height**: 10 rows (indexed 0-9), interior rows 1-8
//! - **Spawn position**: `(width / 2, height / 2)` = (15, 5)
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 200 | Fixed interval between simulation steps |
//!
//! # Glyphs
//!
//! | Constant | Glyph | Description |
//! |----------|-------|-------------|
//! | `BORDER_GLYPH` | `#` | Border cells |
//! | `FRUIT_GLYPH` | `*` | The fruit |
//! | `HEAD_GLYPH` | `O` | Snake head |
//! | `BODY_GLYPH` | `o` | Every other snake segment |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, Intent, Position, GRID_HEIGHT, GRID_WIDTH};
//!
//! // Directions know their opposite
//! assert_eq!(Direction::Up.opposite(), Direction::Down);
//!
//! // Positions shift by a direction
//! let p = Position::new(5, 5).step(Direction::Left);
//! assert_eq!(p, Position::new(4, 5));
//!
//! // Parse an intent
//! assert_eq!(Intent::from_str("quit"), Some(Intent::Quit));
//!
//! // Grid dimensions
//! assert_eq!(GRID_WIDTH, 30);
//! assert_eq!(GRID_HEIGHT, 10);
//! ```

/// Grid width in cells, border included (30 columns)
pub const GRID_WIDTH: u16 = 30;

/// Grid height in cells, border included (10 rows)
pub const GRID_HEIGHT: u16 = 10;

/// Smallest grid that still has one interior cell.
pub const MIN_GRID_SIDE: u16 = 3;

/// Fixed timestep interval in milliseconds (200ms = 5 steps per second)
pub const TICK_MS: u64 = 200;

pub const BORDER_GLYPH: char = '#';
pub const FRUIT_GLYPH: char = '*';
pub const HEAD_GLYPH: char = 'O';
pub const BODY_GLYPH: char = 'o';

/// Label drawn in front of the score.
pub const SCORE_LABEL: &str = "Points: ";

/// Rows between the bottom border and the score line.
pub const SCORE_ROW_GAP: u16 = 2;

/// Message shown once the session is over.
pub const GAME_OVER_TEXT: &str = "GAME OVER - Press q to quit";


/// A cell on the grid.
///
/// Coordinates are signed so that a step past the left/top edge can be
/// represented before the wrap-around rule folds it back into the interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

impl Position {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// Position one cell away in `dir`, without any boundary handling.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::{Direction, Position};
    ///
    /// assert_eq!(Position::new(1, 1).step(Direction::Up), Position::new(1, 0));
    /// ```
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl From<(i16, i16)> for Position {
    fn from((x, y): (i16, i16)) -> Self {
        Self { x, y }
    }
}

/// Heading of the snake.
///
/// Screen coordinates: `y` grows downwards, so `Up` is `(0, -1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The direction pointing the other way.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::Left.opposite(), Direction::Right);
    /// assert_eq!(Direction::Down.opposite(), Direction::Up);
    /// ```
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Unit offset `(dx, dy)` for one step.
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Player intent produced by an input source.
///
/// "No input" is represented as `Option::<Intent>::None` at the call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Turn(Direction),
    Quit,
}

impl Intent {
    /// Parse an intent from a string (case-insensitive)
    ///
    /// Accepts direction names and "quit" | "q".
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Intent::Turn(Direction::Up)),
            "down" => Some(Intent::Turn(Direction::Down)),
            "left" => Some(Intent::Turn(Direction::Left)),
            "right" => Some(Intent::Turn(Direction::Right)),
            "quit" | "q" => Some(Intent::Quit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Turn(dir) => dir.as_str(),
            Intent::Quit => "quit",
        }
    }
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    /// The head moved onto one of its own segments.
    Collided,
    /// The player asked to quit.
    Quit,
    /// The body covers every interior cell; there is nowhere left for fruit.
    BoardFilled,
}

impl GameOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameOutcome::Collided => "collided",
            GameOutcome::Quit => "quit",
            GameOutcome::BoardFilled => "board_filled",
        }
    }
}
