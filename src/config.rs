//! Process configuration.
//!
//! There are no command-line flags. A handful of environment variables are read
//! once at startup:
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `SNAKE_SEED` | Seed for fruit placement | random |
//! | `SNAKE_LOG_PATH` | File that receives tracing output | unset (no logging) |
//! | `RUST_LOG` | Log filter directives (see [`crate::logging`]) | `info` |
//!
//! Grid size and tick rate are fixed.

use std::path::PathBuf;
use std::time::Duration;

use crate::types::{GRID_HEIGHT, GRID_WIDTH, TICK_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub width: u16,
    pub height: u16,
    pub tick: Duration,
    pub seed: u64,
    pub log_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            tick: Duration::from_millis(TICK_MS),
            seed: rand::random(),
            log_path: None,
        }
    }
}

impl Config {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup.
    ///
    /// Unparseable or blank values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup("SNAKE_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.seed);

        let log_path = lookup("SNAKE_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        Self {
            seed,
            log_path,
            ..defaults
        }
    }
}
