//! Player identification and per-player score storage.
//!
//! ## Player
//!
//! The game is strictly two-player. `Player` is a closed enum rather than a
//! numeric id: every operation that touches a score names which side it
//! belongs to, and the compiler rules out a third player.
//!
//! ## PlayerScores
//!
//! Per-player score storage backed by a fixed array for O(1) access.
//! Supports iteration and indexing by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players sharing the screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    First,
    Second,
}

impl Player {
    /// Get the raw side index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::First => 0,
            Player::Second => 1,
        }
    }

    /// The opposing player.
    #[must_use]
    pub const fn other(self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Iterate over both players in screen order.
    ///
    /// ```
    /// use tap_duel::core::Player;
    ///
    /// let players: Vec<_> = Player::all().collect();
    /// assert_eq!(players, vec![Player::First, Player::Second]);
    /// ```
    pub fn all() -> impl Iterator<Item = Player> {
        [Player::First, Player::Second].into_iter()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::First => write!(f, "First Player"),
            Player::Second => write!(f, "Second Player"),
        }
    }
}

/// Per-player score storage with O(1) access.
///
/// ## Example
///
/// ```
/// use tap_duel::core::{Player, PlayerScores};
///
/// let mut scores = PlayerScores::new();
/// scores[Player::First] += 1;
///
/// assert_eq!(scores[Player::First], 1);
/// assert_eq!(scores[Player::Second], 0);
/// assert_eq!(scores.total(), 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerScores {
    data: [u32; 2],
}

impl PlayerScores {
    /// Create a score board with both sides at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { data: [0, 0] }
    }

    /// Create a score board from explicit values.
    #[must_use]
    pub const fn with_values(first: u32, second: u32) -> Self {
        Self {
            data: [first, second],
        }
    }

    /// Get a player's score.
    #[must_use]
    pub fn get(&self, player: Player) -> u32 {
        self.data[player.index()]
    }

    /// Get a mutable reference to a player's score.
    pub fn get_mut(&mut self, player: Player) -> &mut u32 {
        &mut self.data[player.index()]
    }

    /// Sum of both scores.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.data[0] + self.data[1]
    }

    /// Zero both scores.
    pub fn reset(&mut self) {
        self.data = [0, 0];
    }

    /// Iterate over (Player, score) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Player, u32)> + '_ {
        Player::all().map(|p| (p, self.get(p)))
    }
}

impl Index<Player> for PlayerScores {
    type Output = u32;

    fn index(&self, player: Player) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl IndexMut<Player> for PlayerScores {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_basics() {
        assert_eq!(Player::First.index(), 0);
        assert_eq!(Player::Second.index(), 1);
        assert_eq!(Player::First.other(), Player::Second);
        assert_eq!(Player::Second.other(), Player::First);
        assert_eq!(format!("{}", Player::First), "First Player");
        assert_eq!(format!("{}", Player::Second), "Second Player");
    }

    #[test]
    fn test_player_all() {
        let players: Vec<_> = Player::all().collect();
        assert_eq!(players, vec![Player::First, Player::Second]);
    }

    #[test]
    fn test_scores_new() {
        let scores = PlayerScores::new();
        assert_eq!(scores[Player::First], 0);
        assert_eq!(scores[Player::Second], 0);
        assert_eq!(scores.total(), 0);
    }

    #[test]
    fn test_scores_mutation() {
        let mut scores = PlayerScores::new();
        scores[Player::First] += 3;
        scores[Player::Second] += 1;

        assert_eq!(scores[Player::First], 3);
        assert_eq!(scores[Player::Second], 1);
        assert_eq!(scores.total(), 4);
    }

    #[test]
    fn test_scores_reset() {
        let mut scores = PlayerScores::with_values(5, 2);
        scores.reset();
        assert_eq!(scores.total(), 0);
    }

    #[test]
    fn test_scores_iter() {
        let scores = PlayerScores::with_values(2, 7);
        let pairs: Vec<_> = scores.iter().collect();
        assert_eq!(pairs, vec![(Player::First, 2), (Player::Second, 7)]);
    }

    #[test]
    fn test_scores_serialization() {
        let scores = PlayerScores::with_values(3, 1);
        let json = serde_json::to_string(&scores).unwrap();
        let deserialized: PlayerScores = serde_json::from_str(&json).unwrap();
        assert_eq!(scores, deserialized);
    }
}
