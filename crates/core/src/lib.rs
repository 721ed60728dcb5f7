//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on terminals or input devices, making it:
//!
//! - **Deterministic**: Same seed produces identical fruit placement
//! - **Testable**: Any layout can be built with [`GameState::from_layout`]
//! - **Portable**: Can run in any environment (terminal, headless, benches)
//!
//! # Module Structure
//!
//! - [`grid`]: Playfield geometry, interior bounds and the wrap-around rule
//! - [`game_state`]: Snake body, heading, fruit, score and session outcome
//! - [`rng`]: Seeded fruit sampler (rejection sampling with a free-cell fallback)
//!
//! # Game Rules
//!
//! - **Turning**: A turn that would reverse the snake onto itself is ignored
//! - **Wrap-around**: Leaving the interior re-enters on the opposite edge
//! - **Growth**: Eating keeps the tail on that same step (length +1, score +1)
//! - **Collision**: Moving onto any segment behind the head ends the game
//! - **Board filled**: Eating when no free cell is left ends the game
//!
//! # Example
//!
//! ```
//! use tui_snake_core::GameState;
//! use tui_snake_types::{Direction, Intent, Position};
//!
//! let mut game = GameState::from_layout(
//!     30, 10, 7,
//!     &[Position::new(15, 5)],
//!     Direction::Down,
//!     Position::new(15, 6),
//! ).unwrap();
//!
//! game.apply_input(None);
//! game.advance();
//!
//! assert_eq!(game.score(), 1);
//! assert_eq!(game.body().len(), 2);
//!
//! game.apply_input(Some(Intent::Quit));
//! assert!(game.game_over());
//! ```

pub mod game_state;
pub mod grid;
pub mod rng;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use game_state::{GameState, LayoutError, StepEvent};
pub use grid::Grid;
pub use rng::FruitSampler;
