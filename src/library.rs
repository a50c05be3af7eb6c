//! Directory import: turns a folder of audio files into track records.
//!
//! The scanner only reads; tracks it finds are appended to a `TrackList`
//! by the caller like any other track.

mod model;
mod scan;

pub use model::ImportedTrack;
pub use scan::scan;

use crate::playlist::{TrackList, TrackListError};

/// Append every imported track to `list` in scan order and return how many
/// were added.
pub fn append_all(list: &mut TrackList, tracks: &[ImportedTrack]) -> Result<usize, TrackListError> {
    for t in tracks {
        list.append(&t.title, &t.artist, t.duration)?;
    }
    Ok(tracks.len())
}
