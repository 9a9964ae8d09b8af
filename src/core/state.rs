//! Game state: scores, countdown position, and the tap log.
//!
//! ## GameState
//!
//! The single mutable value of the whole game:
//! - Per-player scores
//! - Seconds left on the countdown
//! - Whether the round is running
//! - The chosen background color
//! - A per-round tap history for replay and debugging
//!
//! The state never talks to a display or a timer. The controller applies
//! mutations here and mirrors them out to the surfaces.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::outcome::RoundResult;
use super::player::{Player, PlayerScores};

/// The two supported background colors.
///
/// The value is a choice, not a pixel color: the display surface maps it to
/// whatever its toolkit calls light and dark gray.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BackgroundColor {
    #[default]
    Light,
    Dark,
}

impl BackgroundColor {
    /// The other color. Toggling twice returns to the original.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            BackgroundColor::Light => BackgroundColor::Dark,
            BackgroundColor::Dark => BackgroundColor::Light,
        }
    }
}

/// A recorded tap with its position in the round.
///
/// Used for replay/debugging; the sum of records always matches the score
/// totals within a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TapRecord {
    /// The player who tapped.
    pub player: Player,

    /// Sequence number within the round (0-based).
    pub sequence: u32,
}

/// Complete game state for one session.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Current scores.
    pub scores: PlayerScores,

    /// Whole seconds left on the countdown.
    pub time_left_secs: u32,

    /// True from the first tap of a round until the round ends.
    pub running: bool,

    /// Current background color choice.
    pub background: BackgroundColor,

    /// Taps of the current round, in order.
    ///
    /// Uses an `im` persistent vector so cloning the state is cheap.
    pub tap_history: Vector<TapRecord>,

    /// Next tap sequence number.
    tap_sequence: u32,
}

impl GameState {
    /// Create an idle state with a full countdown.
    #[must_use]
    pub fn new(round_secs: u32) -> Self {
        Self {
            scores: PlayerScores::new(),
            time_left_secs: round_secs,
            running: false,
            background: BackgroundColor::default(),
            tap_history: Vector::new(),
            tap_sequence: 0,
        }
    }

    /// Record a tap: increment the player's score and log it.
    ///
    /// Returns the player's new score.
    pub fn record_tap(&mut self, player: Player) -> u32 {
        self.scores[player] += 1;

        let sequence = self.tap_sequence;
        self.tap_sequence += 1;
        self.tap_history.push_back(TapRecord { player, sequence });

        self.scores[player]
    }

    /// Number of taps registered this round.
    #[must_use]
    pub fn tap_count(&self) -> usize {
        self.tap_history.len()
    }

    /// Outcome if the round ended right now.
    #[must_use]
    pub fn round_result(&self) -> RoundResult {
        RoundResult::from_scores(&self.scores)
    }

    /// Return to the idle state: scores zeroed, countdown refilled, tap log
    /// cleared. The background color survives resets.
    pub fn reset(&mut self, round_secs: u32) {
        self.scores.reset();
        self.time_left_secs = round_secs;
        self.running = false;
        self.tap_history.clear();
        self.tap_sequence = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(60);

        assert_eq!(state.scores.total(), 0);
        assert_eq!(state.time_left_secs, 60);
        assert!(!state.running);
        assert_eq!(state.background, BackgroundColor::Light);
        assert_eq!(state.tap_count(), 0);
    }

    #[test]
    fn test_record_tap() {
        let mut state = GameState::new(60);

        assert_eq!(state.record_tap(Player::First), 1);
        assert_eq!(state.record_tap(Player::First), 2);
        assert_eq!(state.record_tap(Player::Second), 1);

        assert_eq!(state.scores[Player::First], 2);
        assert_eq!(state.scores[Player::Second], 1);
        assert_eq!(state.tap_count(), 3);

        let sequences: Vec<u32> = state.tap_history.iter().map(|r| r.sequence).collect();
        assert_eq!(sequences, vec![0, 1, 2]);
    }

    #[test]
    fn test_round_result() {
        let mut state = GameState::new(60);
        assert_eq!(state.round_result(), RoundResult::Draw);

        state.record_tap(Player::Second);
        assert_eq!(state.round_result(), RoundResult::Winner(Player::Second));
    }

    #[test]
    fn test_reset_clears_round_but_keeps_background() {
        let mut state = GameState::new(60);
        state.record_tap(Player::First);
        state.running = true;
        state.time_left_secs = 12;
        state.background = BackgroundColor::Dark;

        state.reset(60);

        assert_eq!(state.scores.total(), 0);
        assert_eq!(state.time_left_secs, 60);
        assert!(!state.running);
        assert_eq!(state.tap_count(), 0);
        assert_eq!(state.background, BackgroundColor::Dark);

        // Sequence numbering restarts with the round
        assert_eq!(state.record_tap(Player::First), 1);
        assert_eq!(state.tap_history[0].sequence, 0);
    }

    #[test]
    fn test_background_toggle_involution() {
        let color = BackgroundColor::Light;
        assert_eq!(color.toggled(), BackgroundColor::Dark);
        assert_eq!(color.toggled().toggled(), color);
    }

    #[test]
    fn test_state_clone_is_independent() {
        let mut state = GameState::new(60);
        state.record_tap(Player::First);

        let mut cloned = state.clone();
        cloned.record_tap(Player::Second);

        assert_eq!(state.tap_count(), 1);
        assert_eq!(cloned.tap_count(), 2);
    }
}
