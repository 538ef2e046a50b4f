//! Configuration error types.

/// Errors raised while loading, saving or validating settings.
///
/// None of these can happen once a [`Board`](crate::sim::Board) exists: every
/// bound the simulation relies on is checked up front.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the settings file from disk.
    #[error("failed to read settings: {0}")]
    ReadError(#[source] std::io::Error),

    /// Failed to write the settings file to disk.
    #[error("failed to write settings: {0}")]
    WriteError(#[source] std::io::Error),

    /// Settings file is not valid JSON for [`Settings`](crate::Settings).
    #[error("failed to parse settings: {0}")]
    ParseError(#[source] serde_json::Error),

    /// Failed to serialize settings to JSON.
    #[error("failed to serialize settings: {0}")]
    SerializeError(#[source] serde_json::Error),

    /// A field dimension or the bubble radius is not strictly positive.
    #[error("{name} must be positive, got {value}")]
    InvalidDimension { name: &'static str, value: i32 },

    /// The field cannot hold a single bubble horizontally.
    #[error("field width {width} leaves no room for a bubble of radius {radius}")]
    FieldTooNarrow { width: i32, radius: i32 },

    /// Spawn timeout of zero ticks.
    #[error("spawn timeout must be at least one tick")]
    InvalidSpawnTimeout,

    /// Speed range is empty or allows a stationary bubble.
    #[error("invalid speed range {min}..={max} (need 1 <= min <= max)")]
    InvalidSpeedRange { min: i32, max: i32 },

    /// Bubble coordinates near the bottom edge would not fit in an `i32`.
    #[error(
        "field height {height} with radius {radius} and max speed {max_speed} is too large"
    )]
    FieldTooLarge {
        height: i32,
        radius: i32,
        max_speed: i32,
    },

    /// A configured opening bubble has a non-letter label or no fall speed.
    #[error("opening bubble #{index} ('{letter}', speed {speed}) is invalid")]
    InvalidOpeningBubble {
        index: usize,
        letter: char,
        speed: i32,
    },
}
