use crate::Clock;

pub const DEFAULT_SPLASH_MS: u64 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preloader {
    started_ms: u64,
    duration_ms: u64,
}

impl Preloader {
    pub fn start(clock: &dyn Clock, duration_ms: u64) -> Self {
        Self {
            started_ms: clock.now_millis(),
            duration_ms,
        }
    }

    pub fn is_visible(&self, now_ms: u64) -> bool {
        self.remaining_ms(now_ms) > 0
    }

    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        let elapsed = now_ms.saturating_sub(self.started_ms);
        self.duration_ms.saturating_sub(elapsed)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    struct FakeClock {
        now: Cell<u64>,
    }

    impl Clock for FakeClock {
        fn now_millis(&self) -> u64 {
            self.now.get()
        }
    }

    #[test]
    fn splash_hides_after_duration() {
        let clock = FakeClock { now: Cell::new(10_000) };
        let preloader = Preloader::start(&clock, DEFAULT_SPLASH_MS);
        assert!(preloader.is_visible(10_000));
        assert_eq!(preloader.remaining_ms(12_500), 500);
        assert!(!preloader.is_visible(13_000));
    }

    #[test]
    fn clock_going_backwards_keeps_splash_up() {
        let clock = FakeClock { now: Cell::new(5_000) };
        let preloader = Preloader::start(&clock, 1_000);
        assert_eq!(preloader.remaining_ms(4_000), 1_000);
    }

    #[test]
    fn zero_duration_never_shows() {
        let clock = FakeClock { now: Cell::new(0) };
        assert!(!Preloader::start(&clock, 0).is_visible(0));
    }
}
