//! Session state machine and per-tick driver
//!
//! A session is either playing (and owns its board) or over (and keeps only the
//! final score). The transition is one-way.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::board::Board;
use crate::error::ConfigError;
use crate::settings::Settings;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Bubbles falling, keystrokes count
    Playing,
    /// Miss threshold exceeded
    GameOver,
}

/// A discrete event from the input source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window close / quit
    CloseRequested,
    /// A typed character (any case)
    Text(char),
}

/// Whether the driving loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    CloseRequested,
}

/// Counters frozen at the end of a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalScore {
    pub hits: u32,
    pub misses: u32,
}

impl From<&Board> for FinalScore {
    fn from(board: &Board) -> Self {
        Self {
            hits: board.hits(),
            misses: board.misses(),
        }
    }
}

#[derive(Debug, Clone)]
enum SessionPhase {
    Playing(Board),
    GameOver(FinalScore),
}

/// One game from first spawn to game over
#[derive(Debug, Clone)]
pub struct Session {
    phase: SessionPhase,
    /// Session ends once misses strictly exceed this
    miss_threshold: u32,
    /// Ticks simulated while playing
    time_ticks: u64,
}

impl Session {
    /// Start a session on an empty board
    pub fn new(settings: &Settings) -> Result<Self, ConfigError> {
        let board = Board::new(settings)?;
        log::info!(
            "Session started ({}x{}, miss threshold {})",
            board.width(),
            board.height(),
            settings.miss_threshold
        );
        Ok(Self::with_board(board, settings.miss_threshold))
    }

    /// Start a session on a prepared board
    pub fn with_board(board: Board, miss_threshold: u32) -> Self {
        Self {
            phase: SessionPhase::Playing(board),
            miss_threshold,
            time_ticks: 0,
        }
    }

    /// Advance the session by one tick.
    ///
    /// Keystrokes are applied in order before the board moves. A close request
    /// stops processing immediately; the board is left untouched for this tick.
    pub fn tick<I, R>(&mut self, events: I, rng: &mut R) -> TickOutcome
    where
        I: IntoIterator<Item = InputEvent>,
        R: Rng,
    {
        match &mut self.phase {
            SessionPhase::Playing(board) => {
                for event in events {
                    match event {
                        InputEvent::CloseRequested => return TickOutcome::CloseRequested,
                        InputEvent::Text(c) => {
                            board.mark_by_hit(crate::normalize_letter(c));
                        }
                    }
                }

                board.update(rng);
                self.time_ticks += 1;

                if board.misses() > self.miss_threshold {
                    let score = FinalScore::from(&*board);
                    log::info!(
                        "Game over after {} ticks: {} hits, {} misses",
                        self.time_ticks,
                        score.hits,
                        score.misses
                    );
                    self.phase = SessionPhase::GameOver(score);
                }
            }

            SessionPhase::GameOver(_) => {
                if events
                    .into_iter()
                    .any(|e| e == InputEvent::CloseRequested)
                {
                    return TickOutcome::CloseRequested;
                }
            }
        }

        TickOutcome::Continue
    }

    pub fn phase(&self) -> GamePhase {
        match self.phase {
            SessionPhase::Playing(_) => GamePhase::Playing,
            SessionPhase::GameOver(_) => GamePhase::GameOver,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase() == GamePhase::GameOver
    }

    /// The live board, while playing
    pub fn board(&self) -> Option<&Board> {
        match &self.phase {
            SessionPhase::Playing(board) => Some(board),
            SessionPhase::GameOver(_) => None,
        }
    }

    /// Mutable access to the live board (scripted setups)
    pub fn board_mut(&mut self) -> Option<&mut Board> {
        match &mut self.phase {
            SessionPhase::Playing(board) => Some(board),
            SessionPhase::GameOver(_) => None,
        }
    }

    /// Current (or final) counters
    pub fn score(&self) -> FinalScore {
        match &self.phase {
            SessionPhase::Playing(board) => FinalScore::from(board),
            SessionPhase::GameOver(score) => *score,
        }
    }

    pub fn miss_threshold(&self) -> u32 {
        self.miss_threshold
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }
}
