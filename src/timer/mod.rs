//! Countdown timer seam: the contract plus two drivers.
//!
//! - `service`: the `TimerService` trait, handles, and events
//! - `manual`: deterministic driver advanced by hand (tests, headless hosts)
//! - `clock`: wall-clock driver for interactive hosts

pub mod clock;
pub mod manual;
pub mod service;

pub use clock::WallClockTimer;
pub use manual::ManualTimer;
pub use service::{TimerEvent, TimerFiring, TimerHandle, TimerService};
