//! Falling bubble entity

use glam::IVec2;

/// A falling, lettered target.
///
/// `pos` is the top-left corner of the bubble's bounding square, matching how
/// the render sink positions circles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bubble {
    pub id: u32,
    pub pos: IVec2,
    letter: char,
    /// Pixels per tick, always >= 1
    speed: i32,
    alive: bool,
}

impl Bubble {
    pub fn new(id: u32, pos: IVec2, letter: char, speed: i32) -> Self {
        debug_assert!(speed >= 1, "bubble speed must be positive, got {speed}");
        Self {
            id,
            pos,
            letter: crate::normalize_letter(letter),
            speed,
            alive: true,
        }
    }

    /// Move one tick's worth downward. Saturates at the bottom of the `i32` range.
    #[inline]
    pub fn advance(&mut self) {
        self.pos.y = self.pos.y.saturating_add(self.speed);
    }

    /// Mark dead. Returns true only for the call that actually killed it.
    pub fn kill(&mut self) -> bool {
        std::mem::replace(&mut self.alive, false)
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    #[inline]
    pub fn letter(&self) -> char {
        self.letter
    }

    #[inline]
    pub fn speed(&self) -> i32 {
        self.speed
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.pos.y
    }
}
