//! Frame timing: caps the redraw rate without blocking the event loop.
//!
//! The clock is a two-state machine. It starts Idle; the first tick is
//! always admitted and moves it to Running. From then on a tick is
//! admitted only once the cap interval has elapsed, and the driver
//! sleeps until `next_deadline` between ticks. Display vsync still
//! bounds the effective rate from below, so the effective rate is
//! min(refresh rate, cap).

use std::time::{Duration, Instant};

/// Clock lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Before the first admitted tick
    Idle,

    /// Ticking indefinitely at the capped rate
    Running,
}

/// Tick-rate governor for the render loop
#[derive(Debug)]
pub struct FrameClock {
    interval: Duration,
    state: RunState,
    last_tick: Instant,
}

impl FrameClock {
    /// Create a clock capped at `fps_cap` ticks per second
    pub fn new(fps_cap: u32) -> Self {
        let fps = fps_cap.max(1);
        Self {
            interval: Duration::from_secs_f64(1.0 / fps as f64),
            state: RunState::Idle,
            last_tick: Instant::now(),
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Admit or refuse a tick at `now`.
    ///
    /// The first call transitions Idle -> Running and is always
    /// admitted. Later calls are admitted once the interval has
    /// elapsed since the last admitted tick. No catch-up: a late tick
    /// resets the interval from its own time.
    pub fn try_tick(&mut self, now: Instant) -> bool {
        match self.state {
            RunState::Idle => {
                self.state = RunState::Running;
                self.last_tick = now;
                true
            }
            RunState::Running => {
                if now.duration_since(self.last_tick) >= self.interval {
                    self.last_tick = now;
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Earliest instant the next tick may run
    pub fn next_deadline(&self, now: Instant) -> Instant {
        match self.state {
            RunState::Idle => now,
            RunState::Running => self.last_tick + self.interval,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_is_immediate() {
        let mut clock = FrameClock::new(60);
        assert_eq!(clock.state(), RunState::Idle);
        let now = Instant::now();
        assert_eq!(clock.next_deadline(now), now);
        assert!(clock.try_tick(now));
        assert_eq!(clock.state(), RunState::Running);
    }

    #[test]
    fn test_tick_refused_inside_interval() {
        let mut clock = FrameClock::new(60);
        let base = Instant::now();
        assert!(clock.try_tick(base));
        assert!(!clock.try_tick(base + Duration::from_millis(5)));
        assert!(!clock.try_tick(base + Duration::from_millis(16)));
    }

    #[test]
    fn test_tick_admitted_after_interval() {
        let mut clock = FrameClock::new(60);
        let base = Instant::now();
        assert!(clock.try_tick(base));
        assert!(clock.try_tick(base + Duration::from_millis(17)));
    }

    #[test]
    fn test_deadlines_space_at_the_cap() {
        let mut clock = FrameClock::new(60);
        let base = Instant::now();
        assert!(clock.try_tick(base));
        let deadline = clock.next_deadline(base);
        let gap = deadline.duration_since(base);
        assert!(gap >= Duration::from_millis(16) && gap <= Duration::from_millis(17));
    }

    #[test]
    fn test_slow_ticks_pass_straight_through() {
        // A display slower than the cap drives ticks directly.
        let mut clock = FrameClock::new(60);
        let base = Instant::now();
        assert!(clock.try_tick(base));
        assert!(clock.try_tick(base + Duration::from_millis(33)));
        assert!(clock.try_tick(base + Duration::from_millis(66)));
    }

    #[test]
    fn test_zero_cap_is_guarded() {
        let mut clock = FrameClock::new(0);
        assert!(clock.try_tick(Instant::now()));
    }
}
