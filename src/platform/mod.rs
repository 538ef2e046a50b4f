//! Platform abstraction layer
//!
//! Handles the pieces that sit outside the simulation:
//! - Input events (window close, typed characters)
//! - Frame pacing
//! - Driving one poll → tick → render frame
//! - The headless demo session

pub mod demo;

pub use demo::{DemoOptions, DemoSummary, MAX_DEMO_TICKS, run_demo};

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use rand::Rng;

use crate::renderer::{RenderSink, Renderer};
use crate::sim::{InputEvent, Session, TickOutcome};

/// Source of discrete input events, polled until empty each frame
pub trait InputSource {
    fn poll_event(&mut self) -> Option<InputEvent>;
}

/// Queue of pre-recorded events (tests, demo mode)
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    queue: VecDeque<InputEvent>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.queue.push_back(event);
    }

    /// Queue every character of `text` as a keystroke
    pub fn push_text(&mut self, text: &str) {
        self.queue.extend(text.chars().map(InputEvent::Text));
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl InputSource for ScriptedInput {
    fn poll_event(&mut self) -> Option<InputEvent> {
        self.queue.pop_front()
    }
}

/// Sleeps until the next frame deadline to hold a fixed frame rate
#[derive(Debug)]
pub struct FramePacer {
    /// None disables pacing
    frame: Option<Duration>,
    next_deadline: Option<Instant>,
}

impl FramePacer {
    pub fn new(target_fps: u32) -> Self {
        let frame = (target_fps > 0).then(|| Duration::from_secs(1) / target_fps);
        Self {
            frame,
            next_deadline: None,
        }
    }

    /// Pacer that never sleeps
    pub fn unlimited() -> Self {
        Self::new(0)
    }

    pub fn frame_duration(&self) -> Option<Duration> {
        self.frame
    }

    /// Block until the current frame's time slot is used up
    pub fn wait(&mut self) {
        let Some(frame) = self.frame else {
            return;
        };

        let now = Instant::now();
        let deadline = self.next_deadline.unwrap_or(now + frame);
        if deadline > now {
            std::thread::sleep(deadline - now);
            self.next_deadline = Some(deadline + frame);
        } else {
            // Running behind: don't try to catch up with a burst of frames
            self.next_deadline = Some(now + frame);
        }
    }
}

/// Run one frame: drain input, tick the session, draw it.
///
/// Nothing is drawn on the frame a close is requested.
pub fn run_frame<I, S, R>(
    session: &mut Session,
    input: &mut I,
    renderer: &mut Renderer<S>,
    rng: &mut R,
) -> TickOutcome
where
    I: InputSource + ?Sized,
    S: RenderSink,
    R: Rng,
{
    let events = std::iter::from_fn(|| input.poll_event());
    let outcome = session.tick(events, rng);
    if outcome == TickOutcome::Continue {
        renderer.render(session);
    }
    outcome
}
