//! Game clock with fixed-timestep accumulator

use std::time::Instant;

/// Tracks game time and provides a fixed-timestep accumulator for the
/// update/render loop.
///
/// Each `tick()` adds real elapsed time to the accumulator; the loop then
/// drains whole timesteps with `should_step()`/`consume_step()`. Falling
/// behind real time by N timesteps yields exactly N steps of catch-up.
pub struct GameClock {
    /// Total elapsed game time in seconds
    pub total_time: f64,
    /// Time since last frame in seconds
    pub delta_time: f64,
    /// Fixed timestep interval (default: 1/60 second)
    pub fixed_timestep: f64,
    /// Accumulated time for fixed-step consumption
    accumulator: f64,
    /// Last tick instant
    last_instant: Instant,
    /// Whether this is the first tick
    first_tick: bool,
}

impl Default for GameClock {
    fn default() -> Self {
        Self {
            total_time: 0.0,
            delta_time: 0.0,
            fixed_timestep: 1.0 / 60.0,
            accumulator: 0.0,
            last_instant: Instant::now(),
            first_tick: true,
        }
    }
}

impl GameClock {
    /// Create a new game clock with the default 60Hz fixed timestep
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a game clock with a custom fixed timestep
    pub fn with_fixed_timestep(hz: f64) -> Self {
        Self {
            fixed_timestep: 1.0 / hz,
            ..Self::default()
        }
    }

    /// Advance the clock. Call once per loop iteration.
    pub fn tick(&mut self) {
        let now = Instant::now();

        if self.first_tick {
            self.first_tick = false;
            self.last_instant = now;
            self.delta_time = 0.0;
            return;
        }

        let elapsed = now.duration_since(self.last_instant).as_secs_f64();
        self.last_instant = now;

        // Clamp to bound the catch-up burst after a long stall (max 250ms)
        self.delta_time = elapsed.min(0.25);
        self.total_time += self.delta_time;
        self.accumulator += self.delta_time;
    }

    /// Returns true while at least one whole timestep is owed
    pub fn should_step(&self) -> bool {
        self.accumulator >= self.fixed_timestep
    }

    /// Consume one fixed timestep from the accumulator
    pub fn consume_step(&mut self) {
        self.accumulator -= self.fixed_timestep;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(clock: &mut GameClock) -> u32 {
        let mut steps = 0;
        while clock.should_step() {
            clock.consume_step();
            steps += 1;
        }
        steps
    }

    #[test]
    fn test_clock_defaults() {
        let clock = GameClock::new();
        assert!((clock.fixed_timestep - 1.0 / 60.0).abs() < 1e-10);
        assert_eq!(clock.total_time, 0.0);
        assert_eq!(clock.delta_time, 0.0);
    }

    #[test]
    fn test_custom_timestep() {
        let clock = GameClock::with_fixed_timestep(30.0);
        assert!((clock.fixed_timestep - 1.0 / 30.0).abs() < 1e-10);
    }

    #[test]
    fn test_first_tick_zero_delta() {
        let mut clock = GameClock::new();
        clock.tick();
        assert_eq!(clock.delta_time, 0.0);
        assert!(!clock.should_step());
    }

    #[test]
    fn test_one_period_one_step() {
        let mut clock = GameClock::new();
        // Advance by exactly one frame period per iteration: exactly one
        // update+render step each time, no catch-up burst
        for _ in 0..10 {
            clock.accumulator += clock.fixed_timestep;
            assert_eq!(drain(&mut clock), 1);
        }
    }

    #[test]
    fn test_stall_produces_exact_catchup() {
        // Power-of-two rate keeps the accumulator arithmetic exact
        let mut clock = GameClock::with_fixed_timestep(64.0);
        // A stall worth N whole periods yields exactly N steps
        clock.accumulator += clock.fixed_timestep * 5.0;
        assert_eq!(drain(&mut clock), 5);
        assert!(!clock.should_step());
    }

    #[test]
    fn test_fractional_remainder_carries_over() {
        let mut clock = GameClock::new();
        clock.accumulator += clock.fixed_timestep * 1.5;
        assert_eq!(drain(&mut clock), 1);
        // The half step left over completes on the next advance
        clock.accumulator += clock.fixed_timestep * 0.5;
        assert_eq!(drain(&mut clock), 1);
    }

    #[test]
    fn test_each_step_consumes_one_timestep() {
        let mut clock = GameClock::with_fixed_timestep(64.0);
        clock.accumulator = clock.fixed_timestep * 3.0;
        clock.consume_step();
        assert!((clock.accumulator - clock.fixed_timestep * 2.0).abs() < 1e-12);
        clock.consume_step();
        assert!((clock.accumulator - clock.fixed_timestep).abs() < 1e-12);
    }
}
