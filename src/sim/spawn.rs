//! Fixed-period spawn timer

/// Countdown that fires once every `timeout` ticks.
///
/// Tick based rather than wall-clock based, so a fixed tick rate gives a fixed
/// spawn rate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnScheduler {
    timer: i64,
    timeout: u32,
}

impl SpawnScheduler {
    pub fn new(timeout: u32) -> Self {
        debug_assert!(timeout >= 1, "spawn timeout must be at least one tick");
        Self {
            timer: i64::from(timeout),
            timeout,
        }
    }

    /// Advance one tick. Returns true when a bubble should spawn now.
    pub fn tick(&mut self) -> bool {
        self.timer -= 1;
        if self.timer <= 0 {
            self.timer = i64::from(self.timeout);
            return true;
        }
        false
    }

    /// Ticks left before the next spawn
    pub fn remaining(&self) -> i64 {
        self.timer
    }

    pub fn timeout(&self) -> u32 {
        self.timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_every_timeout_ticks() {
        let mut scheduler = SpawnScheduler::new(30);
        let fired: Vec<u32> = (1..=90).filter(|_| scheduler.tick()).collect();
        assert_eq!(fired, vec![30, 60, 90]);
    }

    #[test]
    fn test_timeout_of_one_fires_every_tick() {
        let mut scheduler = SpawnScheduler::new(1);
        assert!((0..10).all(|_| scheduler.tick()));
    }

    #[test]
    fn test_remaining_resets_after_fire() {
        let mut scheduler = SpawnScheduler::new(3);
        assert!(!scheduler.tick());
        assert_eq!(scheduler.remaining(), 2);
        assert!(!scheduler.tick());
        assert!(scheduler.tick());
        assert_eq!(scheduler.remaining(), 3);
    }
}
