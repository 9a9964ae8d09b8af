//! Round outcome: who won the countdown.

use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerScores};

/// Result of a completed round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundResult {
    /// Single winner.
    Winner(Player),
    /// Tied scores, including 0-0. Nobody wins.
    Draw,
}

impl RoundResult {
    /// Compare final scores: strictly higher score wins, equal is a draw.
    #[must_use]
    pub fn from_scores(scores: &PlayerScores) -> Self {
        let first = scores[Player::First];
        let second = scores[Player::Second];

        if first > second {
            RoundResult::Winner(Player::First)
        } else if second > first {
            RoundResult::Winner(Player::Second)
        } else {
            RoundResult::Draw
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, RoundResult::Winner(p) if *p == player)
    }

    /// The name announced at the end of the round.
    #[must_use]
    pub fn winner_name(&self) -> String {
        match self {
            RoundResult::Winner(player) => player.to_string(),
            RoundResult::Draw => "Nobody".to_string(),
        }
    }
}

impl std::fmt::Display for RoundResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.winner_name())
    }
}
