//! crossterm-backed [`Display`].

use anyhow::Result;
use tui_snake_engine::Display;

use crate::core::GameState;
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};
use crate::renderer::TerminalRenderer;
use crate::types::Position;

/// Renders frames to the real terminal.
///
/// The current frame is kept so the game-over text can be laid over it.
pub struct TerminalDisplay {
    view: GameView,
    renderer: TerminalRenderer,
    fb: FrameBuffer,
}

impl TerminalDisplay {
    pub fn new(view: GameView) -> Self {
        Self {
            view,
            renderer: TerminalRenderer::new(),
            fb: FrameBuffer::new(0, 0),
        }
    }

    fn viewport(state: &GameState) -> Viewport {
        let (w, h) = crossterm::terminal::size().unwrap_or((0, 0));
        let min = Viewport::for_state(state);
        Viewport::new(w.max(min.width), h.max(min.height))
    }
}

impl Default for TerminalDisplay {
    fn default() -> Self {
        Self::new(GameView::default())
    }
}

impl Display for TerminalDisplay {
    fn render_frame(&mut self, state: &GameState) -> Result<()> {
        let vp = Self::viewport(state);
        self.fb.reset(vp.width, vp.height);
        self.view.render_into(state, &mut self.fb);
        self.renderer.draw(&self.fb)
    }

    fn render_game_over(&mut self, text: &str, at: Position) -> Result<()> {
        self.view.overlay_text(&mut self.fb, text, at);
        self.renderer.draw(&self.fb)
    }
}
