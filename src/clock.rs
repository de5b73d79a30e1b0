use std::time::{Duration, Instant};

/// Gate deciding on which frames the simulation advances.
///
/// A tick is due once at least `period` has passed since the last accepted
/// tick.  Accepting a tick restarts the timer from the frame's timestamp, so
/// at most one tick happens per frame however late the frame is; missed
/// ticks are dropped, not caught up.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct TickClock {
    period: Duration,
    last_tick: Instant,
}

impl TickClock {
    pub(crate) fn new(period: Duration, now: Instant) -> TickClock {
        TickClock {
            period,
            last_tick: now,
        }
    }

    /// Start timing afresh from `now`
    pub(crate) fn restart(&mut self, now: Instant) {
        self.last_tick = now;
    }

    /// Report whether a tick is due at `now`, and if so, accept it
    pub(crate) fn tick_due(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_tick) >= self.period {
            self.last_tick = now;
            true
        } else {
            false
        }
    }
}
