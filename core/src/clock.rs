use alloc::rc::Rc;
use core::cell::Cell;
use core::time::Duration;
use web_time::Instant;

/// Source of the current time for game timing.
pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Copy, Clone, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Clone, Debug)]
pub struct ManualClock {
    origin: Instant,
    offset: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset: Rc::default(),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.offset.set(self.offset.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.offset.get()
    }
}

/// Whole seconds between `start` and `end`, saturating.
pub fn whole_seconds(start: Instant, end: Instant) -> u32 {
    end.saturating_duration_since(start)
        .as_secs()
        .try_into()
        .unwrap_or(u32::MAX)
}
