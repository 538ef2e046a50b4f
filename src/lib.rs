//! Bubble Typer - a falling-letter typing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bubbles, spawning, scoring, session phases)
//! - `renderer`: Draw-call sink and the owned render context
//! - `platform`: Input source and frame pacing collaborators
//! - `settings`: Validated, serializable game configuration

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use settings::{OpeningBubble, Settings};

/// Game configuration constants
pub mod consts {
    /// Target frame rate of the driving loop
    pub const TARGET_FPS: u32 = 60;

    /// Play field dimensions (pixels)
    pub const FIELD_WIDTH: i32 = 800;
    pub const FIELD_HEIGHT: i32 = 600;

    /// Bubble radius (pixels)
    pub const BUBBLE_RADIUS: i32 = 10;

    /// Ticks between two spawns
    pub const SPAWN_TIMEOUT_TICKS: u32 = 30;

    /// Fall speed range, pixels per tick (inclusive)
    pub const MIN_SPEED: i32 = 1;
    pub const MAX_SPEED: i32 = 10;

    /// Session ends once misses strictly exceed this
    pub const MISS_THRESHOLD: u32 = 10;
}

/// Uppercase a typed character so it can be compared with bubble letters.
///
/// Only ASCII is folded; anything else passes through and simply never matches.
#[inline]
pub fn normalize_letter(c: char) -> char {
    c.to_ascii_uppercase()
}
