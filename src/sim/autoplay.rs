//! Idle/demo mode typist
//!
//! Produces keystrokes from what is on the board, the way a (slightly sloppy)
//! player would. It only reads the board; hits still go through the session.

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::board::Board;

/// Demo player that types the letter of the most urgent bubble
#[derive(Debug, Clone)]
pub struct AutoTypist {
    /// Ticks between two keystrokes
    reaction_ticks: u32,
    cooldown: u32,
    /// Probability of hitting a wrong key (0.0 - 1.0)
    typo_chance: f64,
    rng: Pcg32,
}

impl AutoTypist {
    pub fn new(seed: u64, reaction_ticks: u32, typo_chance: f64) -> Self {
        Self {
            reaction_ticks: reaction_ticks.max(1),
            cooldown: reaction_ticks.max(1),
            typo_chance: typo_chance.clamp(0.0, 1.0),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Decide this tick's keystroke, if any
    pub fn next_key(&mut self, board: &Board) -> Option<char> {
        self.cooldown = self.cooldown.saturating_sub(1);
        if self.cooldown > 0 {
            return None;
        }

        // Closest to the bottom edge is the one about to become a miss
        let target = board
            .bubbles()
            .iter()
            .filter(|b| b.is_alive())
            .max_by_key(|b| b.y())?;

        self.cooldown = self.reaction_ticks;

        if self.rng.random_bool(self.typo_chance) {
            // Fat-fingered: any letter except the intended one
            let offset = self.rng.random_range(1..26u32);
            let index = (target.letter() as u32).wrapping_sub('A' as u32) % 26;
            let wrong = char::from(b'a' + ((index + offset) % 26) as u8);
            return Some(wrong);
        }

        Some(target.letter().to_ascii_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use glam::IVec2;

    fn board() -> Board {
        Board::new(&Settings {
            spawn_timeout_ticks: 100_000,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_types_lowest_bubble_after_reaction_delay() {
        let mut board = board();
        board.push_bubble(IVec2::new(10, 50), 'A', 1);
        board.push_bubble(IVec2::new(20, 300), 'M', 1);
        board.push_bubble(IVec2::new(30, 120), 'Z', 1);

        let mut typist = AutoTypist::new(1, 3, 0.0);
        assert_eq!(typist.next_key(&board), None);
        assert_eq!(typist.next_key(&board), None);
        assert_eq!(typist.next_key(&board), Some('m'));
        // Cooldown restarts after a keystroke
        assert_eq!(typist.next_key(&board), None);
    }

    #[test]
    fn test_empty_board_types_nothing() {
        let board = board();
        let mut typist = AutoTypist::new(1, 1, 0.0);
        assert!((0..10).all(|_| typist.next_key(&board).is_none()));
    }

    #[test]
    fn test_always_typo_never_matches() {
        let mut board = board();
        board.push_bubble(IVec2::new(10, 50), 'C', 1);

        let mut typist = AutoTypist::new(42, 1, 1.0);
        for _ in 0..50 {
            let key = typist.next_key(&board).unwrap();
            assert!(key.is_ascii_lowercase());
            assert_ne!(key, 'c');
        }
    }
}
