//! Display surface contract.
//!
//! The controller composes final strings and pushes them out; the surface
//! owns widgets, fonts, and colors. Tap feedback is an opaque visual effect
//! the surface may render however it likes (or not at all).

use crate::core::{BackgroundColor, Player};

/// Rendering sink consumed by the controller.
pub trait DisplaySurface {
    /// Replace the score line, e.g. `"3 : 1"`.
    fn set_score_text(&mut self, text: &str);

    /// Replace the time-left line, e.g. `"59"`.
    fn set_time_text(&mut self, text: &str);

    /// Apply a background color choice.
    fn set_background_color(&mut self, color: BackgroundColor);

    /// Play a tap-feedback effect on the given player's control.
    fn play_tap_effect(&mut self, player: Player);
}

/// Display that ignores everything. Useful for benchmarks and simulations.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullDisplay;

impl DisplaySurface for NullDisplay {
    fn set_score_text(&mut self, _text: &str) {}
    fn set_time_text(&mut self, _text: &str) {}
    fn set_background_color(&mut self, _color: BackgroundColor) {}
    fn play_tap_effect(&mut self, _player: Player) {}
}

/// Display that remembers what it was told. The test double for every
/// rendering assertion in this crate, and a ready-made model for text hosts.
#[derive(Clone, Debug, Default)]
pub struct RecordingDisplay {
    /// Most recent score text.
    pub score_text: String,

    /// Most recent time text.
    pub time_text: String,

    /// Most recent background color.
    pub background: BackgroundColor,

    /// Every tap effect requested, in order.
    pub effects: Vec<Player>,

    /// How many times the time text was replaced.
    pub time_updates: u32,
}

impl RecordingDisplay {
    /// Create an empty recording display.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DisplaySurface for RecordingDisplay {
    fn set_score_text(&mut self, text: &str) {
        self.score_text = text.to_string();
    }

    fn set_time_text(&mut self, text: &str) {
        self.time_text = text.to_string();
        self.time_updates += 1;
    }

    fn set_background_color(&mut self, color: BackgroundColor) {
        self.background = color;
    }

    fn play_tap_effect(&mut self, player: Player) {
        self.effects.push(player);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_display_captures_calls() {
        let mut display = RecordingDisplay::new();

        display.set_score_text("2 : 0");
        display.set_time_text("58");
        display.set_background_color(BackgroundColor::Dark);
        display.play_tap_effect(Player::First);
        display.play_tap_effect(Player::Second);

        assert_eq!(display.score_text, "2 : 0");
        assert_eq!(display.time_text, "58");
        assert_eq!(display.background, BackgroundColor::Dark);
        assert_eq!(display.effects, vec![Player::First, Player::Second]);
        assert_eq!(display.time_updates, 1);
    }

    #[test]
    fn test_null_display_accepts_everything() {
        let mut display = NullDisplay;
        display.set_score_text("0 : 0");
        display.set_time_text("60");
        display.set_background_color(BackgroundColor::Light);
        display.play_tap_effect(Player::First);
    }
}
