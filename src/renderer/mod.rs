//! Rendering front end
//!
//! The game never talks to a window directly. It issues draw calls to a
//! [`RenderSink`] through an eagerly built [`Renderer`] that owns it.

pub mod recording;

pub use recording::{DrawCommand, RecordingSink};

use glam::IVec2;

use crate::sim::{Board, Session};

/// RGBA color, components in 0.0 - 1.0
pub type Color = [f32; 4];

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = [0.0, 0.0, 0.0, 1.0];
    pub const BUBBLE: Color = [1.0, 1.0, 1.0, 1.0];
    pub const LETTER: Color = [1.0, 0.0, 1.0, 1.0];
    pub const HUD: Color = [1.0, 1.0, 1.0, 1.0];
    pub const GAME_OVER_BACKGROUND: Color = [1.0, 0.0, 1.0, 1.0];
    pub const GAME_OVER_TITLE: Color = [0.0, 0.0, 1.0, 1.0];
}

/// HUD layout
const HUD_TEXT_SIZE: u32 = 20;
const HUD_SCORE_POS: IVec2 = IVec2::new(10, 10);
const HUD_POPULATION_POS: IVec2 = IVec2::new(10, 30);

/// End screen layout
const GAME_OVER_TITLE: &str = "Game Over";
const GAME_OVER_SIZE: u32 = 70;
const GAME_OVER_POS: IVec2 = IVec2::new(225, 260);

/// Platform drawing surface
pub trait RenderSink {
    /// Fill the whole frame with one color
    fn clear(&mut self, color: Color);
    /// Filled circle whose bounding square starts at `pos`
    fn fill_circle(&mut self, pos: IVec2, radius: i32, color: Color);
    /// Text with its top-left corner at `pos`
    fn text(&mut self, text: &str, pos: IVec2, size: u32, color: Color);
    /// Show the finished frame
    fn present(&mut self);
}

/// Owned render context: one per window, built before the first frame
#[derive(Debug)]
pub struct Renderer<S: RenderSink> {
    sink: S,
}

impl<S: RenderSink> Renderer<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Draw one full frame for the session's current phase
    pub fn render(&mut self, session: &Session) {
        match session.board() {
            Some(board) => {
                self.sink.clear(colors::BACKGROUND);
                self.draw_board(board);
            }
            None => {
                self.sink.clear(colors::GAME_OVER_BACKGROUND);
                self.sink.text(
                    GAME_OVER_TITLE,
                    GAME_OVER_POS,
                    GAME_OVER_SIZE,
                    colors::GAME_OVER_TITLE,
                );
            }
        }
        self.sink.present();
    }

    /// HUD lines, then every live bubble with its letter
    fn draw_board(&mut self, board: &Board) {
        let score = format!("hits: {} misses: {}", board.hits(), board.misses());
        self.sink
            .text(&score, HUD_SCORE_POS, HUD_TEXT_SIZE, colors::HUD);
        let population = format!("bubbles: {}", board.population());
        self.sink
            .text(&population, HUD_POPULATION_POS, HUD_TEXT_SIZE, colors::HUD);

        let radius = board.radius();
        // Label sits slightly right of the circle's left edge, 1.5x radius tall
        let label_offset = IVec2::new(radius / 5, 0);
        let label_size = (radius.saturating_mul(3) / 2).max(1) as u32;

        let mut label = [0u8; 4];
        for bubble in board.bubbles().iter().filter(|b| b.is_alive()) {
            self.sink.fill_circle(bubble.pos, radius, colors::BUBBLE);
            let letter = bubble.letter().encode_utf8(&mut label);
            self.sink
                .text(
                    letter,
                    bubble.pos.saturating_add(label_offset),
                    label_size,
                    colors::LETTER,
                );
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
