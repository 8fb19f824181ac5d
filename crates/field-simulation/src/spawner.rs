//! Periodic particle spawning

/// Divisor applied to a requested particle count to get one batch
pub const SPAWN_BATCH_DIVISOR: usize = 4;

/// Default ticks between batches when periodic spawning is enabled
pub const DEFAULT_SPAWN_INTERVAL: u32 = 120;

/// Counts ticks and fires once every `interval` ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnTimer {
    elapsed: u32,
    interval: u32,
}

impl SpawnTimer {
    /// An interval of 0 behaves like 1: fire every tick.
    pub fn new(interval: u32) -> Self {
        Self {
            elapsed: 0,
            interval: interval.max(1),
        }
    }

    pub fn interval(&self) -> u32 {
        self.interval
    }

    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    /// Advance one tick. Returns `true` and restarts when the interval is reached.
    pub fn tick(&mut self) -> bool {
        self.elapsed += 1;
        if self.elapsed >= self.interval {
            self.elapsed = 0;
            true
        } else {
            false
        }
    }
}

impl Default for SpawnTimer {
    fn default() -> Self {
        Self::new(DEFAULT_SPAWN_INTERVAL)
    }
}

/// Size of one spawn batch: a quarter of the requested count, rounded down
pub fn batch_size(num_particles: usize) -> usize {
    num_particles / SPAWN_BATCH_DIVISOR
}
