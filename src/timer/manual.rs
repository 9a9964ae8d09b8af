//! Deterministic countdown driver advanced by hand.
//!
//! `ManualTimer` is the driver used in tests and headless hosts: time only
//! moves when `advance` is called, so every tick and finish lands at an
//! exact, reproducible point. A wall-clock host wraps this same logic via
//! [`WallClockTimer`](super::clock::WallClockTimer).

use std::time::Duration;

use super::service::{TimerEvent, TimerFiring, TimerHandle, TimerService};

/// One armed countdown. Removed from the driver the moment it finishes or
/// is cancelled, so a long session never accumulates spent entries.
#[derive(Clone, Debug)]
struct Armed {
    duration: Duration,
    interval: Duration,
    elapsed: Duration,
    next_tick: Duration,
    started: bool,
}

/// A countdown driver advanced explicitly with `advance`.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use tap_duel::timer::{ManualTimer, TimerEvent, TimerService};
///
/// let mut timer = ManualTimer::new();
/// let handle = timer.arm(Duration::from_secs(3), Duration::from_secs(1));
/// timer.start(handle);
///
/// timer.advance(Duration::from_secs(3));
/// let events: Vec<_> = timer.drain().into_iter().map(|f| f.event).collect();
///
/// assert_eq!(events.len(), 3); // two ticks, then finish
/// assert_eq!(events[2], TimerEvent::Finished);
/// ```
#[derive(Debug, Default)]
pub struct ManualTimer {
    next_handle: u32,
    // Vec rather than a map: drains stay in arming order, and at most one
    // countdown is live at a time in practice.
    armed: Vec<(TimerHandle, Armed)>,
    queue: Vec<TimerFiring>,
}

impl ManualTimer {
    /// Create a driver with no armed countdowns.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of countdowns the driver is tracking (started or not).
    ///
    /// Finished and cancelled countdowns are pruned, so this stays bounded
    /// however many rounds a session runs.
    #[must_use]
    pub fn armed_count(&self) -> usize {
        self.armed.len()
    }

    /// Check whether a handle is still live (armed, neither finished nor
    /// cancelled).
    #[must_use]
    pub fn is_live(&self, handle: TimerHandle) -> bool {
        self.armed.iter().any(|(h, _)| *h == handle)
    }

    /// Move time forward, queueing ticks and finishes that become due.
    ///
    /// Ticks land at whole interval boundaries strictly before the
    /// duration; the finish lands at the duration and its entry is dropped.
    /// A single large `advance` produces the same events as many small
    /// ones.
    pub fn advance(&mut self, delta: Duration) {
        let mut spent = Vec::new();

        for (handle, t) in &mut self.armed {
            if !t.started {
                continue;
            }

            let target = (t.elapsed + delta).min(t.duration);

            while t.next_tick < t.duration && t.next_tick <= target {
                self.queue.push(TimerFiring {
                    handle: *handle,
                    event: TimerEvent::Tick {
                        remaining: t.duration - t.next_tick,
                    },
                });
                t.next_tick += t.interval;
            }

            t.elapsed = target;
            if t.elapsed >= t.duration {
                spent.push(*handle);
                self.queue.push(TimerFiring {
                    handle: *handle,
                    event: TimerEvent::Finished,
                });
            }
        }

        self.armed.retain(|(h, _)| !spent.contains(h));
    }
}

impl TimerService for ManualTimer {
    fn arm(&mut self, duration: Duration, interval: Duration) -> TimerHandle {
        assert!(!interval.is_zero(), "Tick interval must be non-zero");

        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;

        self.armed.push((
            handle,
            Armed {
                duration,
                interval,
                elapsed: Duration::ZERO,
                next_tick: interval,
                started: false,
            },
        ));

        handle
    }

    fn start(&mut self, handle: TimerHandle) {
        if let Some((_, t)) = self.armed.iter_mut().find(|(h, _)| *h == handle) {
            t.started = true;
        }
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.armed.retain(|(h, _)| *h != handle);
        // Pending events for a cancelled handle must never be delivered
        self.queue.retain(|f| f.handle != handle);
    }

    fn drain(&mut self) -> Vec<TimerFiring> {
        std::mem::take(&mut self.queue)
    }
}
