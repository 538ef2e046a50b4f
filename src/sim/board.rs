//! Play field: bubble collection, motion, hit and expiry rules
//!
//! The per-tick pipeline order is fixed: spawn, advance, expire, clean up.
//! Hits land between ticks and are only swept away by the next cleanup pass.

use glam::IVec2;
use rand::Rng;

use super::bubble::Bubble;
use super::spawn::SpawnScheduler;
use crate::error::ConfigError;
use crate::settings::Settings;

/// What a single [`Board::update`] did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateReport {
    /// Id of the bubble spawned this tick
    pub spawned: Option<u32>,
    /// Bubbles that expired (became misses) this tick
    pub expired: u32,
}

/// The play field
#[derive(Debug, Clone)]
pub struct Board {
    /// Active bubbles in insertion order
    bubbles: Vec<Bubble>,
    hits: u32,
    misses: u32,
    spawner: SpawnScheduler,
    width: i32,
    height: i32,
    radius: i32,
    min_speed: i32,
    max_speed: i32,
    next_id: u32,
}

impl Board {
    /// Build a board holding only the configured opening bubbles.
    ///
    /// Fails if the settings cannot support spawning.
    pub fn new(settings: &Settings) -> Result<Self, ConfigError> {
        settings.validate()?;
        let mut board = Self {
            bubbles: Vec::new(),
            hits: 0,
            misses: 0,
            spawner: SpawnScheduler::new(settings.spawn_timeout_ticks),
            width: settings.field_width,
            height: settings.field_height,
            radius: settings.bubble_radius,
            min_speed: settings.min_speed,
            max_speed: settings.max_speed,
            next_id: 1,
        };
        for opening in &settings.opening_bubbles {
            board.push_bubble(
                IVec2::new(opening.x, opening.y),
                opening.letter,
                opening.speed,
            );
        }
        Ok(board)
    }

    /// Allocate a new entity ID
    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Advance the field by one tick
    pub fn update<R: Rng>(&mut self, rng: &mut R) -> UpdateReport {
        let spawned = self.spawner.tick().then(|| self.spawn_bubble(rng));

        for bubble in self.bubbles.iter_mut().filter(|b| b.is_alive()) {
            bubble.advance();
        }

        let expired = self.mark_outside_bubbles();
        self.remove_dead_bubbles();

        UpdateReport { spawned, expired }
    }

    /// Resolve the earliest live bubble showing `letter`.
    ///
    /// Returns the id of the bubble that was hit. No match is not an error.
    pub fn mark_by_hit(&mut self, letter: char) -> Option<u32> {
        let letter = crate::normalize_letter(letter);
        let bubble = self
            .bubbles
            .iter_mut()
            .find(|b| b.is_alive() && b.letter() == letter)?;

        bubble.kill();
        self.hits += 1;
        log::debug!("Hit bubble {} ({})", bubble.id, letter);
        Some(bubble.id)
    }

    /// Place a bubble directly (scripted setups, tests). Speed is clamped to >= 1.
    pub fn push_bubble(&mut self, pos: IVec2, letter: char, speed: i32) -> u32 {
        let id = self.next_entity_id();
        self.bubbles.push(Bubble::new(id, pos, letter, speed.max(1)));
        id
    }

    /// Synthesize a random bubble just above the visible top edge
    fn spawn_bubble<R: Rng>(&mut self, rng: &mut R) -> u32 {
        let diameter = 2 * self.radius;
        let x = rng.random_range(0..self.width - diameter);
        let speed = rng.random_range(self.min_speed..=self.max_speed);
        let letter = char::from(rng.random_range(b'A'..=b'Z'));

        let id = self.push_bubble(IVec2::new(x, -diameter), letter, speed);
        log::debug!("Spawned bubble {} '{}' at x={} speed={}", id, letter, x, speed);
        id
    }

    /// Kill every live bubble whose bottom edge passed the field. Returns the count.
    fn mark_outside_bubbles(&mut self) -> u32 {
        let limit = self.height;
        let diameter = 2 * self.radius;

        let mut expired = 0;
        for bubble in &mut self.bubbles {
            if bubble.y().saturating_add(diameter) > limit && bubble.kill() {
                log::debug!("Bubble {} ('{}') expired", bubble.id, bubble.letter());
                expired += 1;
            }
        }
        self.misses += expired;
        expired
    }

    fn remove_dead_bubbles(&mut self) {
        self.bubbles.retain(Bubble::is_alive);
    }

    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    /// Number of bubbles currently on the field
    pub fn population(&self) -> usize {
        self.bubbles.len()
    }

    pub fn hits(&self) -> u32 {
        self.hits
    }

    pub fn misses(&self) -> u32 {
        self.misses
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::OpeningBubble;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    /// Board that never spawns on its own during a test
    fn quiet_board() -> Board {
        Board::new(&Settings {
            spawn_timeout_ticks: 100_000,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_three_bubbles_expire_after_620_ticks() {
        let mut board = quiet_board();
        let mut rng = Pcg32::seed_from_u64(1);
        for (x, letter) in [(100, 'A'), (200, 'B'), (300, 'C')] {
            board.push_bubble(IVec2::new(x, -20), letter, 1);
        }

        for _ in 0..620 {
            board.update(&mut rng);
        }

        assert_eq!(board.misses(), 3);
        assert_eq!(board.hits(), 0);
        assert_eq!(board.population(), 0);
    }

    #[test]
    fn test_expiry_boundary_is_strict() {
        let mut board = quiet_board();
        let mut rng = Pcg32::seed_from_u64(1);
        // Bottom edge lands exactly on the field edge: still visible
        board.push_bubble(IVec2::new(0, 579), 'A', 1);
        board.update(&mut rng);
        assert_eq!(board.population(), 1);
        assert_eq!(board.misses(), 0);

        board.update(&mut rng);
        assert_eq!(board.population(), 0);
        assert_eq!(board.misses(), 1);
    }

    #[test]
    fn test_lowercase_hit_resolves_uppercase_bubble() {
        let mut board = quiet_board();
        let id = board.push_bubble(IVec2::new(50, 50), 'B', 2);

        assert_eq!(board.mark_by_hit('b'), Some(id));
        assert_eq!(board.hits(), 1);
    }

    #[test]
    fn test_hit_without_match_changes_nothing() {
        let mut board = quiet_board();
        board.push_bubble(IVec2::new(50, 50), 'B', 2);
        let before = board.bubbles().to_vec();

        assert_eq!(board.mark_by_hit('Z'), None);
        assert_eq!(board.mark_by_hit('7'), None);
        assert_eq!(board.mark_by_hit('é'), None);

        assert_eq!(board.hits(), 0);
        assert_eq!(board.misses(), 0);
        assert_eq!(board.bubbles(), &before[..]);
    }

    #[test]
    fn test_hit_resolves_only_earliest_duplicate() {
        let mut board = quiet_board();
        let first = board.push_bubble(IVec2::new(10, 100), 'K', 1);
        let second = board.push_bubble(IVec2::new(20, 400), 'K', 1);
        let third = board.push_bubble(IVec2::new(30, 300), 'K', 1);

        assert_eq!(board.mark_by_hit('K'), Some(first));
        assert_eq!(board.hits(), 1);
        let alive: Vec<u32> = board
            .bubbles()
            .iter()
            .filter(|b| b.is_alive())
            .map(|b| b.id)
            .collect();
        assert_eq!(alive, vec![second, third]);

        // A second keystroke in the same tick skips the dead one
        assert_eq!(board.mark_by_hit('K'), Some(second));
        assert_eq!(board.hits(), 2);
    }

    #[test]
    fn test_hit_bubble_is_not_counted_as_miss() {
        let mut board = quiet_board();
        let mut rng = Pcg32::seed_from_u64(3);
        // Already past the bottom: would expire on the next update
        board.push_bubble(IVec2::new(0, 700), 'Q', 1);
        board.mark_by_hit('Q');

        let report = board.update(&mut rng);
        assert_eq!(report.expired, 0);
        assert_eq!(board.hits(), 1);
        assert_eq!(board.misses(), 0);
        assert_eq!(board.population(), 0);
    }

    #[test]
    fn test_cleanup_preserves_survivor_order() {
        let mut board = quiet_board();
        let mut rng = Pcg32::seed_from_u64(9);
        let a = board.push_bubble(IVec2::new(0, 0), 'A', 1);
        board.push_bubble(IVec2::new(0, 0), 'B', 1);
        let c = board.push_bubble(IVec2::new(0, 0), 'C', 1);
        board.push_bubble(IVec2::new(0, 0), 'D', 1);
        let e = board.push_bubble(IVec2::new(0, 0), 'E', 1);

        board.mark_by_hit('B');
        board.mark_by_hit('D');
        board.update(&mut rng);

        let ids: Vec<u32> = board.bubbles().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![a, c, e]);
        assert!(board.bubbles().iter().all(Bubble::is_alive));
    }

    #[test]
    fn test_spawns_within_bounds() {
        let mut board = Board::new(&Settings {
            spawn_timeout_ticks: 1,
            ..Default::default()
        })
        .unwrap();
        let mut rng = Pcg32::seed_from_u64(12345);

        for _ in 0..20 {
            let report = board.update(&mut rng);
            let id = report.spawned.expect("timeout of one spawns every tick");
            let bubble = board.bubbles().iter().find(|b| b.id == id).unwrap();
            assert!((0..780).contains(&bubble.x()));
            assert!((1..=10).contains(&bubble.speed()));
            assert!(bubble.letter().is_ascii_uppercase());
            // Spawned at -20 and advanced once
            assert_eq!(bubble.y(), -20 + bubble.speed());
        }
    }

    #[test]
    fn test_default_spawn_period() {
        let mut board = Board::new(&Settings::default()).unwrap();
        let mut rng = Pcg32::seed_from_u64(5);
        let spawned: Vec<usize> = (1..=60)
            .filter(|_| board.update(&mut rng).spawned.is_some())
            .collect();
        assert_eq!(spawned, vec![30, 60]);
    }

    #[test]
    fn test_determinism() {
        let mut board1 = Board::new(&Settings::default()).unwrap();
        let mut board2 = Board::new(&Settings::default()).unwrap();
        let mut rng1 = Pcg32::seed_from_u64(99999);
        let mut rng2 = Pcg32::seed_from_u64(99999);

        for _ in 0..500 {
            board1.update(&mut rng1);
            board2.update(&mut rng2);
        }

        assert_eq!(board1.bubbles(), board2.bubbles());
        assert_eq!(board1.misses(), board2.misses());
    }

    #[test]
    fn test_rejects_invalid_settings() {
        let result = Board::new(&Settings {
            field_width: 0,
            ..Default::default()
        });
        assert!(matches!(result, Err(ConfigError::InvalidDimension { .. })));

        let result = Board::new(&Settings {
            field_height: i32::MAX,
            ..Default::default()
        });
        assert!(matches!(result, Err(ConfigError::FieldTooLarge { .. })));
    }

    #[test]
    fn test_bubble_near_coordinate_limit_expires() {
        let mut board = Board::new(&Settings {
            field_height: i32::MAX - 30,
            spawn_timeout_ticks: 100_000,
            ..Default::default()
        })
        .unwrap();
        let mut rng = Pcg32::seed_from_u64(2);
        board.push_bubble(IVec2::new(0, i32::MAX - 30), 'A', 10);
        // Scripted bubbles are not bound by the field, so the step saturates
        board.push_bubble(IVec2::new(0, i32::MAX - 3), 'B', 10);

        let report = board.update(&mut rng);

        assert_eq!(report.expired, 2);
        assert_eq!(board.misses(), 2);
        assert_eq!(board.population(), 0);
    }

    #[test]
    fn test_opening_bubbles_are_placed_first() {
        let mut board = Board::new(&Settings {
            opening_bubbles: OpeningBubble::classic(),
            ..Default::default()
        })
        .unwrap();

        let layout: Vec<(u32, i32, i32, char, i32)> = board
            .bubbles()
            .iter()
            .map(|b| (b.id, b.x(), b.y(), b.letter(), b.speed()))
            .collect();
        assert_eq!(
            layout,
            vec![
                (1, 100, 100, 'A', 1),
                (2, 200, 100, 'B', 2),
                (3, 300, 100, 'C', 3),
            ]
        );

        // Random spawns keep their schedule and take the next id
        let mut rng = Pcg32::seed_from_u64(8);
        assert_eq!(board.mark_by_hit('c'), Some(3));
        for _ in 0..29 {
            board.update(&mut rng);
        }
        let report = board.update(&mut rng);
        assert_eq!(report.spawned, Some(4));
        assert_eq!(board.hits(), 1);
        assert_eq!(board.misses(), 0);
    }
}
