use thiserror::Error;

/// Failures reported by mutating `TrackList` operations.
///
/// A failed operation never leaves a partially linked node behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackListError {
    /// `insert_at` was given a position outside `0..=len`.
    #[error("invalid position {position} (list holds {size} tracks)")]
    InvalidPosition { position: usize, size: usize },

    /// Growing the node arena failed.
    #[error("out of memory while adding a track")]
    OutOfMemory,
}
