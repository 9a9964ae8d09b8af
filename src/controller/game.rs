//! The game controller: every mutation of game state happens here.
//!
//! `GameController` owns the `GameState` and the three collaborator seams
//! (display, notifier, timer). Hosts feed it taps and menu actions and call
//! `pump` from their event loop; the controller mirrors every state change
//! out to the display.
//!
//! ## Round lifecycle
//!
//! ```text
//! Idle(time=full) --register_tap--> Running
//! Running --register_tap--> Running (score++, time unaffected)
//! Running --on_tick--> Running (time recomputed)
//! Running --on_finish--> Idle(time=full, scores=0)   [winner announced]
//! any --toggle/about--> same state, side effect only
//! any --request_exit--> Terminated (absorbing)
//! ```
//!
//! ## Timer discipline
//!
//! Exactly one countdown handle is live at a time. Round reset, snapshot
//! capture, and exit all cancel the current handle before (possibly) arming
//! a new one, and `pump` drops any event whose handle is not the current
//! one. A superseded countdown can therefore never tick or finish against
//! fresh state.

use std::time::Duration;

use crate::controller::menu::{MenuAction, MenuSignal};
use crate::core::{GameConfig, GameState, Player, RoundResult};
use crate::snapshot::Snapshot;
use crate::surface::{DisplaySurface, NotificationSurface};
use crate::timer::{TimerEvent, TimerHandle, TimerService};

/// Single-screen game controller.
pub struct GameController<D, N, T>
where
    D: DisplaySurface,
    N: NotificationSurface,
    T: TimerService,
{
    config: GameConfig,
    state: GameState,
    display: D,
    notifier: N,
    timer: T,
    /// The one live countdown handle, if any.
    handle: Option<TimerHandle>,
    /// Absorbing: once set, every operation is a no-op.
    terminated: bool,
}

impl<D, N, T> GameController<D, N, T>
where
    D: DisplaySurface,
    N: NotificationSurface,
    T: TimerService,
{
    /// Create an idle controller: defaults painted, countdown armed at full
    /// duration but not started.
    #[must_use]
    pub fn new(config: GameConfig, display: D, notifier: N, timer: T) -> Self {
        let state = GameState::new(config.round_secs());

        let mut controller = Self {
            config,
            state,
            display,
            notifier,
            timer,
            handle: None,
            terminated: false,
        };

        controller.paint_all();
        controller.arm_countdown(controller.config.round_duration);
        controller
    }

    /// Create a controller from a prior snapshot and immediately resume:
    /// the countdown restarts from the saved seconds and runs.
    ///
    /// This is a restart of the countdown, not a resume. Sub-second drift
    /// from the previous timer instance is lost.
    #[must_use]
    pub fn from_snapshot(
        config: GameConfig,
        snapshot: &Snapshot,
        display: D,
        notifier: N,
        timer: T,
    ) -> Self {
        let mut controller = Self::new(config, display, notifier, timer);
        controller.restore_from_snapshot(snapshot);
        controller
    }

    // === Taps ===

    /// Register a tap for a player. Always accepted while the session lives.
    ///
    /// The first tap of a round starts the countdown.
    pub fn register_tap(&mut self, player: Player) {
        if self.terminated {
            return;
        }

        if !self.state.running {
            self.start_round();
        }

        let new_score = self.state.record_tap(player);
        log::debug!("tap by {player}, score now {new_score}");

        let text = self.score_text();
        self.display.set_score_text(&text);
        self.display.play_tap_effect(player);
    }

    fn start_round(&mut self) {
        self.state.running = true;

        // A suspended controller (snapshot captured) has no live handle;
        // arm one from the remaining time before starting.
        let handle = match self.handle {
            Some(handle) => handle,
            None => self.arm_countdown(Duration::from_secs(u64::from(
                self.state.time_left_secs,
            ))),
        };
        self.timer.start(handle);
        log::info!(
            "round started, {} seconds on the clock",
            self.state.time_left_secs
        );
    }

    // === Timer events ===

    /// Drain the timer service and dispatch tick/finish events.
    ///
    /// Events whose handle is not the current one come from a superseded
    /// countdown and are dropped.
    pub fn pump(&mut self) {
        for firing in self.timer.drain() {
            if self.terminated || Some(firing.handle) != self.handle {
                continue;
            }
            match firing.event {
                TimerEvent::Tick { remaining } => self.on_tick(remaining),
                TimerEvent::Finished => self.on_finish(),
            }
        }
    }

    /// Handle a countdown tick: recompute whole seconds left and repaint.
    pub fn on_tick(&mut self, remaining: Duration) {
        if self.terminated {
            return;
        }

        self.state.time_left_secs = remaining.as_secs() as u32;
        let text = self.time_text();
        self.display.set_time_text(&text);
    }

    /// Handle countdown expiry: announce the winner and reset the round.
    pub fn on_finish(&mut self) {
        if self.terminated {
            return;
        }

        let result = self.state.round_result();
        log::info!(
            "round over: {} ({} : {})",
            result.winner_name(),
            self.state.scores[Player::First],
            self.state.scores[Player::Second]
        );

        let message = game_over_message(&result);
        self.notifier.show_transient(&message);

        // reset_round cancels the spent handle (a no-op for drivers that
        // already pruned it) and arms the next one
        self.reset_round();
    }

    /// Return to the idle state: scores zeroed, countdown re-armed at full
    /// duration but not started, texts repainted.
    pub fn reset_round(&mut self) {
        if self.terminated {
            return;
        }

        self.cancel_countdown();
        self.state.reset(self.config.round_secs());
        self.arm_countdown(self.config.round_duration);

        let score = self.score_text();
        let time = self.time_text();
        self.display.set_score_text(&score);
        self.display.set_time_text(&time);
    }

    // === Menu operations ===

    /// Dispatch a menu action, telling the host whether to keep running.
    pub fn handle_menu(&mut self, action: MenuAction) -> MenuSignal {
        if self.terminated {
            return MenuSignal::Exit;
        }

        match action {
            MenuAction::ChangeColor => {
                self.toggle_background_color();
                MenuSignal::Continue
            }
            MenuAction::About => {
                self.request_about_info();
                MenuSignal::Continue
            }
            MenuAction::Exit => {
                self.request_exit();
                MenuSignal::Exit
            }
        }
    }

    /// Flip the background between light and dark and apply it immediately.
    /// Independent of the round state.
    pub fn toggle_background_color(&mut self) {
        if self.terminated {
            return;
        }

        self.state.background = self.state.background.toggled();
        self.display.set_background_color(self.state.background);
    }

    /// Show the about dialog. No state change.
    pub fn request_about_info(&mut self) {
        if self.terminated {
            return;
        }

        self.notifier
            .show_modal(&self.config.app_name, &self.config.app_description);
    }

    /// End the session. Absorbing: every later operation is a no-op.
    pub fn request_exit(&mut self) {
        if self.terminated {
            return;
        }

        self.cancel_countdown();
        self.terminated = true;
        log::info!("session ended by user");
    }

    // === Persistence boundary ===

    /// Capture the four persistent fields and cancel the live countdown.
    ///
    /// The controller is suspended afterwards: the round is paused
    /// (`running` turns false) with its remaining seconds intact. A
    /// restored instance gets a freshly armed countdown via
    /// [`GameController::from_snapshot`] or
    /// [`GameController::restore_from_snapshot`]; a tap on the suspended
    /// instance itself restarts the countdown from the remaining seconds.
    pub fn capture_snapshot(&mut self) -> Snapshot {
        self.cancel_countdown();
        self.state.running = false;
        log::debug!(
            "snapshot captured with {} seconds left",
            self.state.time_left_secs
        );

        Snapshot {
            first_score: self.state.scores[Player::First],
            second_score: self.state.scores[Player::Second],
            time_left_secs: self.state.time_left_secs,
            background: self.state.background,
        }
    }

    /// Restore the four persistent fields, repaint, and restart the
    /// countdown from the saved seconds.
    pub fn restore_from_snapshot(&mut self, snapshot: &Snapshot) {
        if self.terminated {
            return;
        }

        self.cancel_countdown();

        self.state.reset(self.config.round_secs());
        self.state.scores[Player::First] = snapshot.first_score;
        self.state.scores[Player::Second] = snapshot.second_score;
        self.state.time_left_secs = snapshot.time_left_secs;
        self.state.background = snapshot.background;

        self.paint_all();

        let handle =
            self.arm_countdown(Duration::from_secs(u64::from(snapshot.time_left_secs)));
        self.timer.start(handle);
        self.state.running = true;

        log::debug!(
            "snapshot restored, countdown restarted at {} seconds",
            snapshot.time_left_secs
        );
    }

    // === Accessors ===

    /// The current game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The configuration this controller was built with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Whether the session has ended.
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// The display surface.
    #[must_use]
    pub fn display(&self) -> &D {
        &self.display
    }

    /// The notification surface.
    #[must_use]
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Mutable access to the timer service, mainly to advance a
    /// [`ManualTimer`](crate::timer::ManualTimer) in tests and headless
    /// hosts.
    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    // === Internals ===

    fn arm_countdown(&mut self, duration: Duration) -> TimerHandle {
        let handle = self.timer.arm(duration, self.config.tick_interval);
        self.handle = Some(handle);
        handle
    }

    fn cancel_countdown(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.timer.cancel(handle);
        }
    }

    fn paint_all(&mut self) {
        let score = self.score_text();
        let time = self.time_text();
        self.display.set_score_text(&score);
        self.display.set_time_text(&time);
        self.display.set_background_color(self.state.background);
    }

    fn score_text(&self) -> String {
        format!(
            "{} : {}",
            self.state.scores[Player::First],
            self.state.scores[Player::Second]
        )
    }

    fn time_text(&self) -> String {
        self.state.time_left_secs.to_string()
    }
}

/// The end-of-round announcement shown as a transient notification.
#[must_use]
pub fn game_over_message(result: &RoundResult) -> String {
    format!("Game over! The winner is {}", result.winner_name())
}
