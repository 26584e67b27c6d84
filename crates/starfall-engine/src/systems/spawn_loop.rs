use crate::core::rng::Rng;

/// A self-rescheduling spawn timer. Each loop owns its own RNG so the two
/// loops driving the shooting-star field stay statistically independent; the
/// wait between fires is drawn uniformly from `delay_range` after every fire.
#[derive(Debug, Clone)]
pub struct SpawnLoop {
    rng: Rng,
    /// Min/max wait between fires, in seconds.
    pub delay_range: (f32, f32),
    /// Seconds until the next fire. Public so tests can inject exact timings.
    pub countdown: f32,
    /// Whether the loop is counting down. Cleared by teardown.
    pub active: bool,
}

impl SpawnLoop {
    pub fn new(seed: u64, delay_range: (f32, f32)) -> Self {
        let mut rng = Rng::new(seed);
        let countdown = rng.range(delay_range.0, delay_range.1).max(0.001);
        SpawnLoop {
            rng,
            delay_range,
            countdown,
            active: true,
        }
    }

    /// Advance the loop by `dt` seconds. Returns how many fires elapsed;
    /// a step larger than the drawn delay yields several. Overshoot carries
    /// into the next wait so virtual time never drifts.
    pub fn tick(&mut self, dt: f32) -> u32 {
        if !self.active {
            return 0;
        }
        self.countdown -= dt;
        let mut fires = 0;
        while self.countdown <= 0.0 {
            fires += 1;
            self.countdown += self.rng.range(self.delay_range.0, self.delay_range.1).max(0.001);
        }
        fires
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_countdown_within_range() {
        for seed in 1..50 {
            let spawn_loop = SpawnLoop::new(seed, (2.0, 5.0));
            assert!((2.0..5.0).contains(&spawn_loop.countdown));
        }
    }

    #[test]
    fn fires_once_when_countdown_elapses() {
        let mut spawn_loop = SpawnLoop::new(42, (2.0, 5.0));
        spawn_loop.countdown = 1.0;
        assert_eq!(spawn_loop.tick(0.5), 0);
        assert_eq!(spawn_loop.tick(0.5), 1);
        // Redrawn wait is back inside the configured range.
        assert!(spawn_loop.countdown > 0.0 && spawn_loop.countdown < 5.0);
    }

    #[test]
    fn large_step_fires_multiple_times() {
        let mut spawn_loop = SpawnLoop::new(42, (1.0, 1.0001));
        spawn_loop.countdown = 1.0;
        let fires = spawn_loop.tick(3.5);
        assert!(fires >= 3, "expected >= 3 fires, got {}", fires);
    }

    #[test]
    fn inactive_loop_never_fires() {
        let mut spawn_loop = SpawnLoop::new(42, (2.0, 5.0));
        spawn_loop.active = false;
        assert_eq!(spawn_loop.tick(100.0), 0);
    }

    #[test]
    fn distinct_seeds_distinct_timings() {
        let a = SpawnLoop::new(1, (2.0, 5.0));
        let b = SpawnLoop::new(2, (2.0, 5.0));
        assert_ne!(a.countdown, b.countdown);
    }
}
