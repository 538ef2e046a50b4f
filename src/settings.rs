//! Game settings
//!
//! Loaded from an optional JSON file by the native binary. Every value the
//! simulation depends on is validated here, before a session is built.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Game settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Play field ===
    /// Visible field width (pixels)
    pub field_width: i32,
    /// Visible field height (pixels)
    pub field_height: i32,
    /// Bubble radius (pixels)
    pub bubble_radius: i32,

    // === Rules ===
    /// Ticks between spawns
    pub spawn_timeout_ticks: u32,
    /// Slowest fall speed (pixels/tick)
    pub min_speed: i32,
    /// Fastest fall speed (pixels/tick)
    pub max_speed: i32,
    /// Misses tolerated before the session ends
    pub miss_threshold: u32,

    // === Loop ===
    /// Frame rate used when pacing in real time
    pub target_fps: u32,
    /// Fixed RNG seed; a time-derived seed is used when absent
    pub seed: Option<u64>,

    // === Setup ===
    /// Bubbles placed on the field before the first tick
    pub opening_bubbles: Vec<OpeningBubble>,
}

/// A bubble present from the start of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningBubble {
    pub x: i32,
    pub y: i32,
    pub letter: char,
    pub speed: i32,
}

impl OpeningBubble {
    pub const fn new(x: i32, y: i32, letter: char, speed: i32) -> Self {
        Self {
            x,
            y,
            letter,
            speed,
        }
    }

    /// The classic A/B/C warm-up row
    pub fn classic() -> Vec<Self> {
        vec![
            Self::new(100, 100, 'A', 1),
            Self::new(200, 100, 'B', 2),
            Self::new(300, 100, 'C', 3),
        ]
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            bubble_radius: BUBBLE_RADIUS,

            spawn_timeout_ticks: SPAWN_TIMEOUT_TICKS,
            min_speed: MIN_SPEED,
            max_speed: MAX_SPEED,
            miss_threshold: MISS_THRESHOLD,

            target_fps: TARGET_FPS,
            seed: None,

            opening_bubbles: Vec::new(),
        }
    }
}

impl Settings {
    /// Check every bound the simulation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("bubble_radius", self.bubble_radius),
        ] {
            if value <= 0 {
                return Err(ConfigError::InvalidDimension { name, value });
            }
        }

        // Spawn x is drawn from [0, width - 2r), which must be non-empty
        if self.spawn_span() <= 0 {
            return Err(ConfigError::FieldTooNarrow {
                width: self.field_width,
                radius: self.bubble_radius,
            });
        }

        if self.spawn_timeout_ticks == 0 {
            return Err(ConfigError::InvalidSpawnTimeout);
        }

        if self.min_speed < 1 || self.min_speed > self.max_speed {
            return Err(ConfigError::InvalidSpeedRange {
                min: self.min_speed,
                max: self.max_speed,
            });
        }

        // A bubble at the bottom edge still moves once more and is tested with
        // its full diameter; labels are 1.5 radii tall
        let fits = self.bubble_radius.checked_mul(3).is_some()
            && self
                .field_height
                .checked_add(self.max_speed)
                .and_then(|y| y.checked_add(2 * self.bubble_radius))
                .is_some();
        if !fits {
            return Err(ConfigError::FieldTooLarge {
                height: self.field_height,
                radius: self.bubble_radius,
                max_speed: self.max_speed,
            });
        }

        for (index, bubble) in self.opening_bubbles.iter().enumerate() {
            if !bubble.letter.is_ascii_alphabetic() || bubble.speed < 1 {
                return Err(ConfigError::InvalidOpeningBubble {
                    index,
                    letter: bubble.letter,
                    speed: bubble.speed,
                });
            }
        }

        Ok(())
    }

    /// Width of the horizontal spawn interval
    pub fn spawn_span(&self) -> i32 {
        self.field_width.saturating_sub(self.bubble_radius.saturating_mul(2))
    }

    /// Read and validate settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let settings: Settings = serde_json::from_str(&json).map_err(ConfigError::ParseError)?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from `path` if given, falling back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match path {
            Some(path) => match Self::load(path) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("Ignoring settings file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self).map_err(ConfigError::SerializeError)?;
        std::fs::write(path, json).map_err(ConfigError::WriteError)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
