//! Snapshot byte codec.
//!
//! Snapshots cross the persistence boundary as opaque bincode bytes. A
//! malformed blob is the one fallible input in the whole crate; hosts that
//! do not care use `decode_or_default` and get a fresh game instead of an
//! error.

use thiserror::Error;

use super::data::Snapshot;

/// Snapshot decode/encode failures.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The byte blob did not decode as a snapshot.
    #[error("snapshot bytes did not decode: {0}")]
    Codec(#[from] bincode::Error),

    /// A required flat entry was absent.
    #[error("snapshot entry `{0}` is missing")]
    MissingEntry(&'static str),

    /// A flat entry held an out-of-range value.
    #[error("snapshot entry `{key}` has invalid value {value}")]
    InvalidEntry { key: &'static str, value: i64 },
}

impl Snapshot {
    /// Serialize to a compact byte blob.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Deserialize from a byte blob.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Deserialize, falling back to [`Snapshot::default`] when the blob is
    /// absent or malformed. Restore must never propagate a fault.
    #[must_use]
    pub fn decode_or_default(bytes: Option<&[u8]>) -> Self {
        match bytes {
            None => Self::default(),
            Some(bytes) => Self::from_bytes(bytes).unwrap_or_else(|err| {
                log::warn!("discarding unreadable snapshot: {err}");
                Self::default()
            }),
        }
    }
}
