//! Wall-clock countdown driver for interactive hosts.
//!
//! Wraps [`ManualTimer`] and advances it by real elapsed time whenever the
//! host touches the service. A UI host polls `drain` once per frame or event
//! loop turn; everything else behaves exactly like the deterministic driver.

use std::time::{Duration, Instant};

use super::manual::ManualTimer;
use super::service::{TimerFiring, TimerHandle, TimerService};

/// Countdown driver that follows the system clock.
#[derive(Debug)]
pub struct WallClockTimer {
    inner: ManualTimer,
    last_sync: Instant,
}

impl WallClockTimer {
    /// Create a driver synced to now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: ManualTimer::new(),
            last_sync: Instant::now(),
        }
    }

    /// Advance the inner driver by the real time since the last sync.
    ///
    /// Called before every operation so that arm/start/cancel observe a
    /// clock consistent with the events already queued.
    fn sync(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_sync);
        self.last_sync = now;
        if !delta.is_zero() {
            self.inner.advance(delta);
        }
    }
}

impl Default for WallClockTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerService for WallClockTimer {
    fn arm(&mut self, duration: Duration, interval: Duration) -> TimerHandle {
        self.sync();
        self.inner.arm(duration, interval)
    }

    fn start(&mut self, handle: TimerHandle) {
        self.sync();
        self.inner.start(handle);
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.sync();
        self.inner.cancel(handle);
    }

    fn drain(&mut self) -> Vec<TimerFiring> {
        self.sync();
        self.inner.drain()
    }
}
