//! Time source for the playback loop.

use std::{
    thread,
    time::{Duration, Instant},
};

/// Milliseconds since an arbitrary origin, plus a way to wait.
pub trait Clock {
    fn now_ms(&self) -> u64;

    fn sleep_ms(&mut self, ms: u64);
}

/// Wall clock backed by [`Instant`] and [`thread::sleep`].
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn sleep_ms(&mut self, ms: u64) {
        thread::sleep(Duration::from_millis(ms));
    }
}

/// Clock that only moves when slept on. Deterministic for tests and replays.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ManualClock {
    now_ms: u64,
    sleeps: u64,
}

impl ManualClock {
    pub const fn new() -> Self {
        Self {
            now_ms: 0,
            sleeps: 0,
        }
    }

    pub fn advance(&mut self, ms: u64) {
        self.now_ms = self.now_ms.saturating_add(ms);
    }

    /// Number of `sleep_ms` calls so far, i.e. reader ticks.
    pub const fn sleeps(&self) -> u64 {
        self.sleeps
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now_ms
    }

    fn sleep_ms(&mut self, ms: u64) {
        self.sleeps += 1;
        self.advance(ms);
    }
}
