//! Headless sink that records draw calls instead of drawing them

use glam::IVec2;
use serde::Serialize;

use super::{Color, RenderSink};

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Clear {
        color: Color,
    },
    Circle {
        pos: IVec2,
        radius: i32,
        color: Color,
    },
    Text {
        text: String,
        pos: IVec2,
        size: u32,
        color: Color,
    },
    Present,
}

/// Keeps the commands of the frame in progress and of the last presented frame
#[derive(Debug, Default)]
pub struct RecordingSink {
    pending: Vec<DrawCommand>,
    last: Vec<DrawCommand>,
    frames: u64,
}

impl RecordingSink {
    /// Commands of the most recently presented frame, `Present` included
    pub fn last_frame(&self) -> &[DrawCommand] {
        &self.last
    }

    /// Text strings of the last frame, in draw order
    pub fn texts(&self) -> Vec<&str> {
        self.last
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames
    }
}

impl RenderSink for RecordingSink {
    fn clear(&mut self, color: Color) {
        // A clear starts a new frame even if the previous one was never presented
        self.pending.clear();
        self.pending.push(DrawCommand::Clear { color });
    }

    fn fill_circle(&mut self, pos: IVec2, radius: i32, color: Color) {
        self.pending.push(DrawCommand::Circle { pos, radius, color });
    }

    fn text(&mut self, text: &str, pos: IVec2, size: u32, color: Color) {
        self.pending.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            size,
            color,
        });
    }

    fn present(&mut self) {
        self.pending.push(DrawCommand::Present);
        self.last = std::mem::take(&mut self.pending);
        self.frames += 1;
        log::trace!("Frame {} presented ({} commands)", self.frames, self.last.len());
    }
}
