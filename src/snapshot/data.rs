//! Snapshot data: the four fields that survive a suspend/restore cycle.
//!
//! A `Snapshot` is deliberately minimal: scores, seconds left, and the
//! background choice. The running flag is not saved since a restored game
//! always restarts its countdown; the tap history is per-process debugging
//! state and does not survive either.
//!
//! Besides the typed struct there is a flat key/value form (`to_entries` /
//! `from_entries`) for hosts whose save mechanism is a bundle of integers.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::codec::SnapshotError;
use crate::core::BackgroundColor;

/// Entry key for the first player's score.
pub const FIRST_SCORE_KEY: &str = "first_score";
/// Entry key for the second player's score.
pub const SECOND_SCORE_KEY: &str = "second_score";
/// Entry key for the seconds left on the countdown.
pub const TIME_LEFT_KEY: &str = "time_left";
/// Entry key for the background color (0 = light, 1 = dark).
pub const BACKGROUND_KEY: &str = "background";

/// Minimal serializable state needed to resume a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// First player's score.
    pub first_score: u32,

    /// Second player's score.
    pub second_score: u32,

    /// Whole seconds left on the countdown.
    pub time_left_secs: u32,

    /// Background color choice.
    pub background: BackgroundColor,
}

impl Snapshot {
    /// Flatten into integer entries keyed by the `*_KEY` constants.
    #[must_use]
    pub fn to_entries(&self) -> FxHashMap<&'static str, i64> {
        let mut entries = FxHashMap::default();
        entries.insert(FIRST_SCORE_KEY, i64::from(self.first_score));
        entries.insert(SECOND_SCORE_KEY, i64::from(self.second_score));
        entries.insert(TIME_LEFT_KEY, i64::from(self.time_left_secs));
        entries.insert(
            BACKGROUND_KEY,
            match self.background {
                BackgroundColor::Light => 0,
                BackgroundColor::Dark => 1,
            },
        );
        entries
    }

    /// Rebuild from integer entries. All four keys must be present and in
    /// range.
    pub fn from_entries(entries: &FxHashMap<&'static str, i64>) -> Result<Self, SnapshotError> {
        fn get_u32(
            entries: &FxHashMap<&'static str, i64>,
            key: &'static str,
        ) -> Result<u32, SnapshotError> {
            let value = *entries
                .get(key)
                .ok_or(SnapshotError::MissingEntry(key))?;
            u32::try_from(value).map_err(|_| SnapshotError::InvalidEntry { key, value })
        }

        let background = match entries.get(BACKGROUND_KEY) {
            None => return Err(SnapshotError::MissingEntry(BACKGROUND_KEY)),
            Some(0) => BackgroundColor::Light,
            Some(1) => BackgroundColor::Dark,
            Some(&value) => {
                return Err(SnapshotError::InvalidEntry {
                    key: BACKGROUND_KEY,
                    value,
                })
            }
        };

        Ok(Self {
            first_score: get_u32(entries, FIRST_SCORE_KEY)?,
            second_score: get_u32(entries, SECOND_SCORE_KEY)?,
            time_left_secs: get_u32(entries, TIME_LEFT_KEY)?,
            background,
        })
    }
}

impl Default for Snapshot {
    /// A fresh, never-played game: zero scores, full classic duration,
    /// light background.
    fn default() -> Self {
        Self {
            first_score: 0,
            second_score: 0,
            time_left_secs: crate::core::GameConfig::default().round_secs(),
            background: BackgroundColor::Light,
        }
    }
}
