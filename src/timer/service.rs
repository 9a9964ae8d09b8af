//! Timer service contract: arm, start, cancel, drain.
//!
//! The countdown is the only source of asynchronous notification in the
//! game, and it is modeled as a polled queue rather than callbacks: drivers
//! accumulate tick/finish events and the controller drains them on its own
//! thread. That keeps the whole engine single-threaded with no
//! synchronization.
//!
//! ## Handles and cancellation
//!
//! `arm` allocates a fresh `TimerHandle` every time; handles are never
//! reused. `cancel` is idempotent and safe on an already-finished or
//! already-cancelled handle, and a cancelled handle never delivers another
//! event. This is the one correctness-critical discipline here: a countdown
//! superseded by a reset or a snapshot must not fire against fresh state.

use std::time::Duration;

/// Opaque identifier for one armed countdown.
///
/// Allocated by a `TimerService`; never reused within a driver's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub u32);

impl TimerHandle {
    /// Get the raw handle value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TimerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timer({})", self.0)
    }
}

/// A single countdown notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerEvent {
    /// Periodic progress report carrying the remaining time.
    Tick { remaining: Duration },

    /// The countdown reached zero. Terminal for its handle: no event for
    /// the same handle ever follows it.
    Finished,
}

/// An event tagged with the handle it belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerFiring {
    pub handle: TimerHandle,
    pub event: TimerEvent,
}

/// External countdown scheduler.
///
/// Implementations guarantee, per handle:
/// - No events before `start`.
/// - Ticks are delivered in order of decreasing remaining time.
/// - `Finished` is delivered exactly once, after all ticks.
/// - After `cancel`, no further events (including ones already pending).
pub trait TimerService {
    /// Arm a countdown. It does not run until `start` is called.
    fn arm(&mut self, duration: Duration, interval: Duration) -> TimerHandle;

    /// Start an armed countdown. No-op for unknown or finished handles.
    fn start(&mut self, handle: TimerHandle);

    /// Cancel a countdown and discard its pending events. Idempotent.
    fn cancel(&mut self, handle: TimerHandle);

    /// Take all pending events, oldest first.
    fn drain(&mut self) -> Vec<TimerFiring>;
}
