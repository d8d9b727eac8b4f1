// Clock
// Time source driving transition animations

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of the current time for animation progress
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock used by the interactive event loop
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Manually advanced clock for driving animations frame by frame.
///
/// Clones share the same time, so a test can keep one handle and hand
/// another to the controller.
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    elapsed: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            elapsed: Rc::new(Cell::new(Duration::ZERO)),
        }
    }

    /// Move time forward
    pub fn advance(&self, by: Duration) {
        self.elapsed.set(self.elapsed.get() + by);
    }

    /// Total time advanced since creation
    pub fn elapsed(&self) -> Duration {
        self.elapsed.get()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.elapsed.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_shares_time_between_clones() {
        let clock = ManualClock::new();
        let handle = clock.clone();
        let start = clock.now();

        handle.advance(Duration::from_millis(120));

        assert_eq!(clock.now() - start, Duration::from_millis(120));
        assert_eq!(clock.elapsed(), Duration::from_millis(120));
    }
}
