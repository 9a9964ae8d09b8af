//! # tap-duel
//!
//! A two-player countdown tapping game engine.
//!
//! Two players share one screen and one countdown. The first tap starts the
//! clock; every tap increments that player's score; when the countdown
//! expires the higher score wins and the round resets. A settings menu
//! toggles the background color, shows an about dialog, or ends the session.
//!
//! ## Design Principles
//!
//! 1. **Host-Agnostic**: The engine never draws, schedules, or exits.
//!    Hosts plug a display, a notifier, and a timer driver into the seams.
//!
//! 2. **Single-Threaded**: All mutation happens on the host's event thread.
//!    The timer is a polled event queue, not a callback source, so no
//!    synchronization exists anywhere.
//!
//! 3. **One Live Countdown**: Resets, snapshots, and exit cancel the
//!    current timer handle before arming another; stale handles can never
//!    deliver events against fresh state.
//!
//! ## Modules
//!
//! - `core`: Players, scores, game state, outcomes, configuration
//! - `timer`: Timer service contract plus deterministic and wall-clock drivers
//! - `surface`: Display and notification contracts with null/recording impls
//! - `controller`: The game controller and menu dispatch
//! - `snapshot`: Suspend/restore persistence boundary
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use tap_duel::controller::GameController;
//! use tap_duel::core::{GameConfig, Player};
//! use tap_duel::surface::{RecordingDisplay, RecordingNotifier};
//! use tap_duel::timer::ManualTimer;
//!
//! let config = GameConfig::new().with_round_duration(Duration::from_secs(3));
//! let mut game = GameController::new(
//!     config,
//!     RecordingDisplay::new(),
//!     RecordingNotifier::new(),
//!     ManualTimer::new(),
//! );
//!
//! game.register_tap(Player::First); // starts the countdown
//! game.register_tap(Player::First);
//! game.register_tap(Player::Second);
//!
//! game.timer_mut().advance(Duration::from_secs(3));
//! game.pump();
//!
//! assert_eq!(
//!     game.notifier().last_transient(),
//!     Some("Game over! The winner is First Player"),
//! );
//! ```

pub mod controller;
pub mod core;
pub mod snapshot;
pub mod surface;
pub mod timer;

// Re-export commonly used types
pub use crate::core::{
    BackgroundColor, GameConfig, GameState, Player, PlayerScores, RoundResult, TapRecord,
};

pub use crate::controller::{game_over_message, GameController, MenuAction, MenuSignal};

pub use crate::surface::{
    DisplaySurface, NotificationSurface, NullDisplay, NullNotifier, RecordingDisplay,
    RecordingNotifier,
};

pub use crate::timer::{
    ManualTimer, TimerEvent, TimerFiring, TimerHandle, TimerService, WallClockTimer,
};

pub use crate::snapshot::{Snapshot, SnapshotError};
