//! Fixed-rate tick scheduling

use std::time::{Duration, Instant};

/// Most ticks run back to back after a stall before the clock skips ahead
pub const MAX_CATCH_UP_TICKS: u32 = 4;

/// Hands out physics ticks at a fixed cadence, independent of the frame rate
pub struct TickClock {
    tick_duration: Duration,
    next_tick: Instant,
}

impl TickClock {
    pub fn new(tick_duration: Duration, now: Instant) -> Self {
        Self {
            tick_duration,
            next_tick: now + tick_duration,
        }
    }

    /// When the next tick is due
    pub fn deadline(&self) -> Instant {
        self.next_tick
    }

    /// Number of ticks due at `now`. Consumes them.
    ///
    /// After a long stall at most [`MAX_CATCH_UP_TICKS`] are returned and the
    /// schedule restarts from `now` instead of replaying the backlog.
    pub fn due_ticks(&mut self, now: Instant) -> u32 {
        let mut due = 0;
        while self.next_tick <= now && due < MAX_CATCH_UP_TICKS {
            self.next_tick += self.tick_duration;
            due += 1;
        }

        if self.next_tick <= now {
            log::debug!("Tick clock fell behind, skipping backlog");
            self.next_tick = now + self.tick_duration;
        }
        due
    }
}
