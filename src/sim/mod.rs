//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only (no wall clock)
//! - Caller-supplied RNG only
//! - Stable iteration order (insertion order, survivors keep their order)
//! - No rendering or platform dependencies

pub mod autoplay;
pub mod board;
pub mod bubble;
pub mod spawn;
pub mod tick;

pub use autoplay::AutoTypist;
pub use board::{Board, UpdateReport};
pub use bubble::Bubble;
pub use spawn::SpawnScheduler;
pub use tick::{FinalScore, GamePhase, InputEvent, Session, TickOutcome};
