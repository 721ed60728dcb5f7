//! crossterm-backed input source.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tui_snake_engine::InputSource;

use crate::map::handle_key_event;
use crate::types::Intent;

/// Reads intents from the terminal's event queue.
///
/// Expects the terminal to already be in raw mode.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

/// Key presses only; auto-repeat counts as a press, releases are ignored.
fn pressed(ev: Event) -> Option<KeyEvent> {
    match ev {
        Event::Key(key) if key.kind != KeyEventKind::Release => Some(key),
        _ => None,
    }
}

impl InputSource for TerminalInput {
    /// Consume at most one key press. Non-key events queued ahead of it are skipped.
    fn poll(&mut self) -> Result<Option<Intent>> {
        while event::poll(Duration::from_secs(0))? {
            if let Some(key) = pressed(event::read()?) {
                return Ok(handle_key_event(key));
            }
        }
        Ok(None)
    }

    fn wait_for_quit(&mut self) -> Result<()> {
        loop {
            if let Some(key) = pressed(event::read()?) {
                if handle_key_event(key) == Some(Intent::Quit) {
                    return Ok(());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    #[test]
    fn release_events_are_not_presses() {
        let release = KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(pressed(Event::Key(release)), None);
    }

    #[test]
    fn repeat_events_count_as_presses() {
        let repeat = KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Repeat,
            state: KeyEventState::NONE,
        };
        assert_eq!(pressed(Event::Key(repeat)), Some(repeat));
    }

    #[test]
    fn non_key_events_are_skipped() {
        assert_eq!(pressed(Event::Resize(80, 24)), None);
        assert_eq!(pressed(Event::FocusGained), None);
    }
}
