//! Terminal snake runner (default binary).
//!
//! Acquires the terminal before any game state exists, plays one session and
//! restores the terminal on every exit path.

use anyhow::Result;

use tui_snake::config::Config;
use tui_snake::core::GameState;
use tui_snake::engine::{GameLoop, TickPacer};
use tui_snake::input::TerminalInput;
use tui_snake::logging;
use tui_snake::term::{install_panic_hook, TerminalDisplay, TerminalSession};
use tui_snake::types::GameOutcome;

fn main() -> Result<()> {
    let config = Config::from_env();
    let _log_guard = logging::init(&config)?;

    install_panic_hook();
    let session = TerminalSession::enter()?;

    let result = run(&config);

    // Restore before reporting anything, whichever way `run` went.
    let restored = session.exit();
    let outcome = result?;
    restored?;

    tracing::info!(outcome = outcome.as_str(), "session closed");
    Ok(())
}

fn run(config: &Config) -> Result<GameOutcome> {
    let mut state = GameState::new(config.width, config.height, config.seed);
    let mut display = TerminalDisplay::default();
    let mut input = TerminalInput::new();
    let mut pacer = TickPacer::new();

    GameLoop::new(config.tick).run(&mut state, &mut display, &mut input, &mut pacer)
}
