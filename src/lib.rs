//! TUI Snake (workspace facade crate).
//!
//! Re-exports the workspace crates under `tui_snake::{core,engine,input,term,types}`
//! and holds the process-level concerns: environment configuration and logging.

pub use tui_snake_core as core;
pub use tui_snake_engine as engine;
pub use tui_snake_input as input;
pub use tui_snake_term as term;
pub use tui_snake_types as types;

pub mod config;
pub mod logging;
