//! Persistence boundary: capture and restore across a suspend cycle.

pub mod codec;
pub mod data;

pub use codec::SnapshotError;
pub use data::{
    Snapshot, BACKGROUND_KEY, FIRST_SCORE_KEY, SECOND_SCORE_KEY, TIME_LEFT_KEY,
};
