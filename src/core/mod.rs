//! Core game types: players, scores, state, outcomes, configuration.
//!
//! Everything in this module is plain data. The seams to the outside world
//! (display, timer, notifications) live in their own modules.

pub mod config;
pub mod outcome;
pub mod player;
pub mod state;

pub use config::GameConfig;
pub use outcome::RoundResult;
pub use player::{Player, PlayerScores};
pub use state::{BackgroundColor, GameState, TapRecord};
