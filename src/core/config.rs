//! Game configuration.
//!
//! Hosts configure the round at startup rather than the engine hardcoding
//! durations or dialog text:
//! - `round_duration`: how long a round runs once the first tap lands
//! - `tick_interval`: how often the countdown reports remaining time
//! - `app_name` / `app_description`: the about-dialog content

use std::time::Duration;

/// Complete game configuration.
///
/// Hosts provide this at startup. `Default` matches the classic setup:
/// a 60 second round ticking once per second.
#[derive(Clone, Debug)]
pub struct GameConfig {
    /// Full duration of one round.
    pub round_duration: Duration,

    /// Interval between countdown ticks.
    pub tick_interval: Duration,

    /// Application name, used as the about-dialog title.
    pub app_name: String,

    /// Application description, used as the about-dialog body.
    pub app_description: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            round_duration: Duration::from_secs(60),
            tick_interval: Duration::from_secs(1),
            app_name: "Tap Duel".to_string(),
            app_description: "Two players, one countdown. Tap your button faster \
                              than your opponent before the time runs out."
                .to_string(),
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the round duration.
    #[must_use]
    pub fn with_round_duration(mut self, duration: Duration) -> Self {
        assert!(!duration.is_zero(), "Round duration must be non-zero");
        self.round_duration = duration;
        self
    }

    /// Set the tick interval.
    #[must_use]
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        assert!(!interval.is_zero(), "Tick interval must be non-zero");
        self.tick_interval = interval;
        self
    }

    /// Set the about-dialog title.
    #[must_use]
    pub fn with_app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = name.into();
        self
    }

    /// Set the about-dialog body.
    #[must_use]
    pub fn with_app_description(mut self, description: impl Into<String>) -> Self {
        self.app_description = description.into();
        self
    }

    /// Full round duration in whole seconds.
    #[must_use]
    pub fn round_secs(&self) -> u32 {
        self.round_duration.as_secs() as u32
    }
}
