//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameState;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{
    Position, BODY_GLYPH, BORDER_GLYPH, FRUIT_GLYPH, HEAD_GLYPH, SCORE_LABEL, SCORE_ROW_GAP,
};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Smallest viewport that fits the board and the score line below it.
    pub fn for_state(state: &GameState) -> Self {
        Self::new(state.width(), state.height() + SCORE_ROW_GAP + 1)
    }
}

/// Glyphs used for each kind of cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub border: char,
    pub fruit: char,
    pub head: char,
    pub body: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            border: BORDER_GLYPH,
            fruit: FRUIT_GLYPH,
            head: HEAD_GLYPH,
            body: BODY_GLYPH,
        }
    }
}

const BORDER_STYLE: CellStyle = CellStyle::plain(Rgb::new(160, 160, 170));
const FRUIT_STYLE: CellStyle = CellStyle::bold(Rgb::new(230, 70, 70));
const HEAD_STYLE: CellStyle = CellStyle::bold(Rgb::new(120, 230, 120));
const BODY_STYLE: CellStyle = CellStyle::plain(Rgb::new(90, 190, 90));
const SCORE_STYLE: CellStyle = CellStyle::plain(Rgb::new(220, 220, 220));
const OVERLAY_STYLE: CellStyle = CellStyle::bold(Rgb::new(255, 255, 255));

/// A lightweight terminal renderer for the snake game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Terminal cell of grid position (0, 0).
    origin: (u16, u16),
    glyphs: Glyphs,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            origin: (0, 0),
            glyphs: Glyphs::default(),
        }
    }
}

impl GameView {
    pub fn with_origin(mut self, x: u16, y: u16) -> Self {
        self.origin = (x, y);
        self
    }

    pub fn with_glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    pub fn glyphs(&self) -> Glyphs {
        self.glyphs
    }

    /// Render the current game state into a new framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, &mut fb);
        fb
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// The framebuffer keeps its size; anything that does not fit is clipped.
    pub fn render_into(&self, state: &GameState, fb: &mut FrameBuffer) {
        let (w, h) = (fb.width(), fb.height());
        fb.reset(w, h);

        self.draw_border(fb, state.width(), state.height());

        fb.put_at(self.origin, state.fruit(), self.glyphs.fruit, FRUIT_STYLE);

        // Tail first so the head wins on a shared cell.
        for &seg in state.body().iter().skip(1).rev() {
            fb.put_at(self.origin, seg, self.glyphs.body, BODY_STYLE);
        }
        fb.put_at(self.origin, state.head(), self.glyphs.head, HEAD_STYLE);

        let score_y = self.origin.1 + state.height() + SCORE_ROW_GAP;
        let line = format!("{}{}", SCORE_LABEL, state.score());
        fb.put_str(self.origin.0, score_y, &line, SCORE_STYLE);
    }

    /// Overlay `text` starting at grid position `at`.
    pub fn overlay_text(&self, fb: &mut FrameBuffer, text: &str, at: Position) {
        let x = self.origin.0.saturating_add(at.x.max(0) as u16);
        let y = self.origin.1.saturating_add(at.y.max(0) as u16);
        fb.put_str(x, y, text, OVERLAY_STYLE);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, width: u16, height: u16) {
        let (max_x, max_y) = (width as i16 - 1, height as i16 - 1);
        for x in 0..=max_x {
            fb.put_at(self.origin, Position::new(x, 0), self.glyphs.border, BORDER_STYLE);
            fb.put_at(self.origin, Position::new(x, max_y), self.glyphs.border, BORDER_STYLE);
        }
        for y in 1..max_y {
            fb.put_at(self.origin, Position::new(0, y), self.glyphs.border, BORDER_STYLE);
            fb.put_at(self.origin, Position::new(max_x, y), self.glyphs.border, BORDER_STYLE);
        }
    }
}
