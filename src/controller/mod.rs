//! Game controller and the menu dispatch table.

pub mod game;
pub mod menu;

pub use game::{game_over_message, GameController};
pub use menu::{MenuAction, MenuSignal};
